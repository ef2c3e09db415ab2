//! Parsing of user-typed decimal strings.
//!
//! Inputs arrive from free-form text fields, so parsing is lenient: the first
//! comma counts as a decimal dot and trailing garbage after a valid numeric
//! prefix is ignored. Failure is represented as NaN rather than an error so
//! the pricing pass can treat "no number" like any other invalid value.

/// Converts a raw input string into an `f64`, or NaN when no numeric prefix
/// exists. Empty and whitespace-only strings yield NaN.
pub fn to_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    let normalized = trimmed.replacen(',', ".", 1);
    let len = float_prefix_len(&normalized);
    if len == 0 {
        return f64::NAN;
    }
    normalized[..len].parse().unwrap_or(f64::NAN)
}

/// Entry-time filter for the quantity/price fields: any number of digits with
/// at most one `.` or `,` between them, i.e. `^[0-9]*([.,][0-9]*)?$`.
/// The empty string passes so the user can clear a field.
pub fn is_partial_decimal(value: &str) -> bool {
    let mut seen_separator = false;
    for ch in value.chars() {
        match ch {
            '0'..='9' => {}
            '.' | ',' if !seen_separator => seen_separator = true,
            _ => return false,
        }
    }
    true
}

/// Length of the longest prefix matching `[+-]? digits [. digits]? [eE [+-]? digits]?`
/// with at least one mantissa digit. Word forms like "inf" are not numbers here.
fn float_prefix_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - int_start;

    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        frac_digits = pos - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    let mantissa_end = pos;
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        if exp_pos < bytes.len() && matches!(bytes[exp_pos], b'+' | b'-') {
            exp_pos += 1;
        }
        let exp_digits_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        if exp_pos > exp_digits_start {
            return exp_pos;
        }
    }
    mantissa_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_is_a_decimal_separator() {
        assert_eq!(to_number("1,5"), 1.5);
        assert_eq!(to_number("0,25"), 0.25);
    }

    #[test]
    fn dot_still_works() {
        assert_eq!(to_number("2.75"), 2.75);
        assert_eq!(to_number("3."), 3.0);
        assert_eq!(to_number(".5"), 0.5);
    }

    #[test]
    fn empty_and_garbage_are_nan() {
        assert!(to_number("").is_nan());
        assert!(to_number("   ").is_nan());
        assert!(to_number("abc").is_nan());
        assert!(to_number(",").is_nan());
    }

    #[test]
    fn word_floats_are_not_numbers() {
        assert!(to_number("inf").is_nan());
        assert!(to_number("nan").is_nan());
    }

    #[test]
    fn trailing_garbage_is_tolerated() {
        assert_eq!(to_number("12kg"), 12.0);
        assert_eq!(to_number("1,5 EUR"), 1.5);
        assert_eq!(to_number("1e3x"), 1000.0);
        assert_eq!(to_number("2e"), 2.0);
    }

    #[test]
    fn leading_whitespace_and_sign() {
        assert_eq!(to_number("  42"), 42.0);
        assert_eq!(to_number("-1,5"), -1.5);
        assert_eq!(to_number("+7"), 7.0);
    }

    #[test]
    fn partial_decimal_filter() {
        assert!(is_partial_decimal(""));
        assert!(is_partial_decimal("12"));
        assert!(is_partial_decimal("12."));
        assert!(is_partial_decimal("12,5"));
        assert!(is_partial_decimal(",5"));
        assert!(!is_partial_decimal("12.3.4"));
        assert!(!is_partial_decimal("1,2.3"));
        assert!(!is_partial_decimal("1a"));
        assert!(!is_partial_decimal("-1"));
        assert!(!is_partial_decimal(" 1"));
    }
}

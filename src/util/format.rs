//! Locale-flavoured display formatting for unit prices.
//!
//! Purely a presentation concern: the core hands out raw `f64` unit prices
//! and this module decides how many fraction digits to show and which decimal
//! separator to use. Swapping it never touches the data model.

use serde::{Deserialize, Serialize};

/// At least this many fraction digits are always shown.
pub const MIN_FRACTION_DIGITS: u8 = 2;
/// Hard ceiling for the configurable maximum.
pub const MAX_FRACTION_DIGITS: u8 = 4;

/// User-facing number formatting preferences, adjustable on the settings page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Render `1,25` instead of `1.25`.
    pub decimal_comma: bool,
    /// Upper bound on fraction digits, clamped to 2..=4.
    pub max_fraction_digits: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            decimal_comma: true,
            max_fraction_digits: MAX_FRACTION_DIGITS,
        }
    }
}

impl DisplaySettings {
    pub fn effective_max_digits(&self) -> u8 {
        self.max_fraction_digits
            .clamp(MIN_FRACTION_DIGITS, MAX_FRACTION_DIGITS)
    }
}

/// Formats a unit price with 2 to `max_fraction_digits` fraction digits:
/// rounded to the maximum, trailing zeros trimmed, but never below two.
/// Non-finite values (a huge price over a tiny quantity can overflow the
/// division to infinity) render as a placeholder.
pub fn format_unit_price(value: f64, settings: &DisplaySettings) -> String {
    if !value.is_finite() {
        return "–".to_string();
    }
    let max_digits = usize::from(settings.effective_max_digits());
    let fixed = format!("{value:.max_digits$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), ""),
    };

    let keep = frac_part
        .trim_end_matches('0')
        .len()
        .max(usize::from(MIN_FRACTION_DIGITS));
    let separator = if settings.decimal_comma { ',' } else { '.' };
    format!("{int_part}{separator}{frac}", frac = &frac_part[..keep])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comma() -> DisplaySettings {
        DisplaySettings::default()
    }

    fn dot() -> DisplaySettings {
        DisplaySettings {
            decimal_comma: false,
            ..DisplaySettings::default()
        }
    }

    #[test]
    fn keeps_at_least_two_digits() {
        assert_eq!(format_unit_price(5.0, &comma()), "5,00");
        assert_eq!(format_unit_price(1.5, &comma()), "1,50");
    }

    #[test]
    fn trims_trailing_zeros_up_to_four_digits() {
        assert_eq!(format_unit_price(1.2345678, &comma()), "1,2346");
        assert_eq!(format_unit_price(0.125, &comma()), "0,125");
        assert_eq!(format_unit_price(2.2, &comma()), "2,20");
    }

    #[test]
    fn dot_locale() {
        assert_eq!(format_unit_price(4.05, &dot()), "4.05");
    }

    #[test]
    fn non_finite_values_render_a_placeholder() {
        // Digit-only inputs can still overflow the unit-price division, e.g.
        // a ~1e308 price over a ~1e-301 quantity.
        let overflowed = 1e308_f64 / 1e-301_f64;
        assert!(overflowed.is_infinite());
        assert_eq!(format_unit_price(overflowed, &comma()), "–");
        assert_eq!(format_unit_price(f64::NEG_INFINITY, &dot()), "–");
        assert_eq!(format_unit_price(f64::NAN, &comma()), "–");
    }

    #[test]
    fn configured_maximum_is_clamped() {
        let narrow = DisplaySettings {
            decimal_comma: false,
            max_fraction_digits: 9,
        };
        assert_eq!(narrow.effective_max_digits(), 4);
        let tight = DisplaySettings {
            decimal_comma: false,
            max_fraction_digits: 0,
        };
        assert_eq!(tight.effective_max_digits(), 2);
        assert_eq!(format_unit_price(1.239, &tight), "1.24");
    }
}

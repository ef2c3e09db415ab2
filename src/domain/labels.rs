//! Spreadsheet-style row labels: A..Z, then AA..ZZ, then AAA and so on.

/// Maps a zero-based index into the bijective base-26 letter sequence.
/// `0 -> "A"`, `25 -> "Z"`, `26 -> "AA"`, `702 -> "AAA"`.
pub fn generate_label(index: usize) -> String {
    let mut letters = String::new();
    let mut n = index as i64;
    while n >= 0 {
        letters.push(char::from(b'A' + (n % 26) as u8));
        n = n / 26 - 1;
    }
    letters.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert_eq!(generate_label(0), "A");
        assert_eq!(generate_label(1), "B");
        assert_eq!(generate_label(25), "Z");
    }

    #[test]
    fn two_letter_rollover() {
        assert_eq!(generate_label(26), "AA");
        assert_eq!(generate_label(27), "AB");
        assert_eq!(generate_label(51), "AZ");
        assert_eq!(generate_label(52), "BA");
        assert_eq!(generate_label(701), "ZZ");
    }

    #[test]
    fn three_letter_rollover() {
        assert_eq!(generate_label(702), "AAA");
        assert_eq!(generate_label(703), "AAB");
    }
}

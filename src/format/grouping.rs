// Digit grouping
//
// Inserts a locale's thousands separator into a run of integer digits.

use num_format::Grouping;

/// Group ASCII digits right-to-left according to `grouping`.
///
/// Standard grouping uses runs of three, Indian grouping takes three
/// and then runs of two, and Posix leaves the digits untouched.
pub(crate) fn group_digits(digits: &str, grouping: Grouping, separator: &str) -> String {
    let (first, rest) = match grouping {
        Grouping::Standard => (3, 3),
        Grouping::Indian => (3, 2),
        Grouping::Posix => return digits.to_string(),
    };

    let mut chunks = Vec::with_capacity(digits.len() / rest + 1);
    let mut end = digits.len();
    let mut size = first;
    while end > size {
        chunks.push(&digits[end - size..end]);
        end -= size;
        size = rest;
    }
    chunks.push(&digits[..end]);
    chunks.reverse();

    chunks.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_grouping() {
        assert_eq!(group_digits("1234567", Grouping::Standard, ","), "1,234,567");
        assert_eq!(group_digits("123456", Grouping::Standard, ","), "123,456");
        assert_eq!(group_digits("1000", Grouping::Standard, "."), "1.000");
    }

    #[test]
    fn test_short_runs_are_untouched() {
        assert_eq!(group_digits("999", Grouping::Standard, ","), "999");
        assert_eq!(group_digits("0", Grouping::Standard, ","), "0");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_digits("1234567", Grouping::Indian, ","), "12,34,567");
        assert_eq!(group_digits("100000", Grouping::Indian, ","), "1,00,000");
        assert_eq!(group_digits("1234", Grouping::Indian, ","), "1,234");
    }

    #[test]
    fn test_posix_grouping() {
        assert_eq!(group_digits("1234567", Grouping::Posix, ","), "1234567");
    }

    #[test]
    fn test_multibyte_separator() {
        assert_eq!(
            group_digits("1234567", Grouping::Standard, "\u{202f}"),
            "1\u{202f}234\u{202f}567"
        );
    }
}

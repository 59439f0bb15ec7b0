//! Amount field validation.

use regex::Regex;
use std::sync::LazyLock;

/// Digits, an optional single decimal point, digits. ASCII only.
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("amount pattern is valid"));

/// Returns true when `text` has the shape of an amount, including the
/// partial forms a user passes through while typing (`""`, `"."`, `"12."`).
pub fn is_amount_shaped(text: &str) -> bool {
    AMOUNT_PATTERN.is_match(text)
}

/// Commits the typed amount text to a value.
///
/// Text that does not match the amount shape, or that matches it but has
/// no numeric value (`""`, `"."`), commits as `None`. The raw text is never
/// rejected here; callers keep it for display.
pub fn parse_amount(text: &str) -> Option<f64> {
    if !is_amount_shaped(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_decimal_numbers() {
        assert_eq!(parse_amount("100"), Some(100.0));
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("7."), Some(7.0));
        assert_eq!(parse_amount("0"), Some(0.0));
    }

    #[test]
    fn empty_and_bare_point_have_no_value() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
        assert!(is_amount_shaped("."));
    }

    #[test]
    fn non_conforming_text_has_no_value() {
        for text in ["-5", "1e3", "12a", "1.2.3", " 10", "10 ", "+1", "1,000", "NaN", "inf"] {
            assert_eq!(parse_amount(text), None, "{text:?} should not commit");
        }
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert!(!is_amount_shaped("١٢"));
        assert_eq!(parse_amount("١٢"), None);
    }
}

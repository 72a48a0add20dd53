//! Number formatting for human-readable display
//!
//! Two operations:
//! - [`format_locale`]: grouped digits with at most `precision` fraction digits
//! - [`format_abbreviated`]: K/M magnitude suffixes for thousands and millions,
//!   falling back to locale formatting below 1,000
//!
//! The free functions use the `en` locale so output does not depend on the host.
//! Use [`NumberFormatter`] to format under any other locale.

mod decimal;
mod grouping;
mod locale;

use decimal::Decimal;
use grouping::group_digits;
use num_format::Locale;

pub use locale::{locale_from_env, resolve_locale, system_locale, LOCALE_ENV_VARS};

/// Fraction digits shown when no precision is given
pub const DEFAULT_PRECISION: usize = 4;

/// Upper bound on requested fraction digits; larger requests are clamped
pub const MAX_PRECISION: usize = 20;

/// Fraction digits kept on an abbreviated value ("1.5K")
const ABBREVIATED_PRECISION: usize = 1;

/// Magnitude tiers, largest first. Thresholds are inclusive.
const TIERS: [(f64, &str); 2] = [(1_000_000.0, "M"), (1_000.0, "K")];

/// Format `value` with `en` grouping and at most `precision` fraction digits.
///
/// Trailing fraction zeros are dropped, ties round away from zero.
///
/// # Examples
/// ```
/// use numfmt::format::{format_locale, DEFAULT_PRECISION};
///
/// assert_eq!(format_locale(1234.5678, 2), "1,234.57");
/// assert_eq!(format_locale(5.0, DEFAULT_PRECISION), "5");
/// ```
pub fn format_locale(value: f64, precision: usize) -> String {
    NumberFormatter::default().format_with_precision(value, precision)
}

/// Format `value` with a K or M suffix once it reaches a thousand.
///
/// # Examples
/// ```
/// use numfmt::format::format_abbreviated;
///
/// assert_eq!(format_abbreviated(999.0), "999");
/// assert_eq!(format_abbreviated(1500.0), "1.5K");
/// assert_eq!(format_abbreviated(2_500_000.0), "2.5M");
/// ```
pub fn format_abbreviated(value: f64) -> String {
    NumberFormatter::default().format_abbreviated(value)
}

/// Locale-aware number formatter
///
/// Cheap to copy; holds the locale and the precision used when none is
/// passed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatter {
    locale: Locale,
    precision: usize,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(Locale::en)
    }
}

impl NumberFormatter {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Set the default precision, clamped to [`MAX_PRECISION`]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Format at this formatter's precision
    pub fn format(&self, value: f64) -> String {
        self.format_with_precision(value, self.precision)
    }

    /// Format with grouped integer digits and at most `precision` fraction digits
    ///
    /// NaN and infinities render as the locale's symbols.
    pub fn format_with_precision(&self, value: f64, precision: usize) -> String {
        if value.is_nan() {
            return self.locale.nan().to_string();
        }
        if value.is_infinite() {
            let sign = if value < 0.0 {
                self.locale.minus_sign()
            } else {
                ""
            };
            return format!("{}{}", sign, self.locale.infinity());
        }

        let decimal = Decimal::from_f64(value).round_half_expand(precision.min(MAX_PRECISION));
        self.render(&decimal)
    }

    /// Format with a K/M suffix, or at this formatter's precision below 1,000
    ///
    /// Negative values are abbreviated on their magnitude. Rounding may carry
    /// a value to the next power of a thousand without changing tier:
    /// 999,999 is "1,000K", not "1M".
    pub fn format_abbreviated(&self, value: f64) -> String {
        if !value.is_finite() {
            return self.format(value);
        }

        let magnitude = value.abs();
        match TIERS.iter().find(|(threshold, _)| magnitude >= *threshold) {
            Some((threshold, suffix)) => {
                let scaled = self.format_with_precision(value / threshold, ABBREVIATED_PRECISION);
                format!("{}{}", scaled, suffix)
            }
            None => {
                tracing::trace!(value, "below abbreviation threshold");
                self.format(value)
            }
        }
    }

    fn render(&self, decimal: &Decimal) -> String {
        let mut out = String::with_capacity(decimal.integer.len() * 2 + decimal.fraction.len());

        if decimal.negative {
            out.push_str(self.locale.minus_sign());
        }
        out.push_str(&group_digits(
            &decimal.integer,
            self.locale.grouping(),
            self.locale.separator(),
        ));
        if !decimal.fraction.is_empty() {
            out.push_str(self.locale.decimal());
            out.push_str(&decimal.fraction);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────
    // Locale formatting
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn test_locale_groups_and_rounds() {
        assert_eq!(format_locale(1234.5678, 2), "1,234.57");
        assert_eq!(format_locale(1234.5678, DEFAULT_PRECISION), "1,234.5678");
        assert_eq!(format_locale(1_234_567.0, DEFAULT_PRECISION), "1,234,567");
    }

    #[test]
    fn test_locale_no_unneeded_fraction() {
        assert_eq!(format_locale(5.0, DEFAULT_PRECISION), "5");
        assert_eq!(format_locale(2.50, DEFAULT_PRECISION), "2.5");
        assert_eq!(format_locale(0.0, DEFAULT_PRECISION), "0");
    }

    #[test]
    fn test_locale_default_precision_caps_fraction() {
        assert_eq!(format_locale(0.123456, DEFAULT_PRECISION), "0.1235");
        assert_eq!(NumberFormatter::default().format(3.14159265), "3.1416");
    }

    #[test]
    fn test_locale_zero_precision() {
        assert_eq!(format_locale(1234.5, 0), "1,235");
        assert_eq!(format_locale(0.4, 0), "0");
    }

    #[test]
    fn test_locale_negative_values() {
        assert_eq!(format_locale(-1234.5, DEFAULT_PRECISION), "-1,234.5");
        assert_eq!(format_locale(-0.0, DEFAULT_PRECISION), "0");
        assert_eq!(format_locale(-0.00001, DEFAULT_PRECISION), "0");
    }

    #[test]
    fn test_locale_precision_is_clamped() {
        assert_eq!(format_locale(0.1, 1000), "0.1");
        let formatter = NumberFormatter::default().with_precision(64);
        assert_eq!(formatter.precision(), MAX_PRECISION);
    }

    #[test]
    fn test_locale_non_finite() {
        assert_eq!(format_locale(f64::NAN, DEFAULT_PRECISION), "NaN");
        assert_eq!(format_locale(f64::INFINITY, DEFAULT_PRECISION), "∞");
        assert_eq!(format_locale(f64::NEG_INFINITY, DEFAULT_PRECISION), "-∞");
    }

    #[test]
    fn test_locale_other_locales() {
        let de = NumberFormatter::new(Locale::de);
        assert_eq!(de.format_with_precision(1234.5678, 2), "1.234,57");
        assert_eq!(de.format(-1_000_000.0), "-1.000.000");
    }

    #[test]
    fn test_formatter_is_deterministic() {
        let formatter = NumberFormatter::default();
        let first = formatter.format(98_765.4321);
        for _ in 0..3 {
            assert_eq!(formatter.format(98_765.4321), first);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Abbreviation
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn test_abbreviated_below_threshold_delegates() {
        assert_eq!(format_abbreviated(999.0), "999");
        assert_eq!(format_abbreviated(999.0), format_locale(999.0, DEFAULT_PRECISION));
        assert_eq!(format_abbreviated(12.34567), "12.3457");
    }

    #[test]
    fn test_abbreviated_thousands() {
        assert_eq!(format_abbreviated(1000.0), "1K");
        assert_eq!(format_abbreviated(1500.0), "1.5K");
        assert_eq!(format_abbreviated(1234.0), "1.2K");
        assert_eq!(format_abbreviated(954_356.0), "954.4K");
    }

    #[test]
    fn test_abbreviated_millions() {
        assert_eq!(format_abbreviated(1_000_000.0), "1M");
        assert_eq!(format_abbreviated(2_500_000.0), "2.5M");
        assert_eq!(format_abbreviated(1_234_567_890.0), "1,234.6M");
    }

    #[test]
    fn test_abbreviated_rounding_stays_in_tier() {
        assert_eq!(format_abbreviated(999_999.0), "1,000K");
        assert_eq!(format_abbreviated(999_950.0), "1,000K");
        assert_eq!(format_abbreviated(999_949.0), "999.9K");
    }

    #[test]
    fn test_abbreviated_tie_rounds_up() {
        assert_eq!(format_abbreviated(1250.0), "1.3K");
        assert_eq!(format_abbreviated(1050.0), "1.1K");
        // Rounds the decimal 1.45, not the binary 1.4499...
        assert_eq!(format_abbreviated(1450.0), "1.5K");
    }

    #[test]
    fn test_abbreviated_negative_is_symmetric() {
        assert_eq!(format_abbreviated(-1500.0), "-1.5K");
        assert_eq!(format_abbreviated(-2_500_000.0), "-2.5M");
        assert_eq!(format_abbreviated(-999.0), "-999");
    }

    #[test]
    fn test_abbreviated_non_finite_has_no_suffix() {
        assert_eq!(format_abbreviated(f64::INFINITY), "∞");
        assert_eq!(format_abbreviated(f64::NAN), "NaN");
    }

    #[test]
    fn test_abbreviated_uses_locale() {
        let de = NumberFormatter::new(Locale::de);
        assert_eq!(de.format_abbreviated(1500.0), "1,5K");
        assert_eq!(de.format_abbreviated(1_234_567_890.0), "1.234,6M");
    }

    #[test]
    fn test_abbreviated_respects_formatter_precision_below_threshold() {
        let formatter = NumberFormatter::default().with_precision(1);
        assert_eq!(formatter.format_abbreviated(12.345), "12.3");
    }
}

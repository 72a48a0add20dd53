//! Decimal digit model used for rounding before rendering.
//!
//! Floats are converted through their shortest round-trip representation, so
//! `0.1` is rounded as the decimal `0.1` and not its binary expansion.

/// Sign plus ASCII integer and fraction digits of a finite value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decimal {
    pub negative: bool,
    pub integer: String,
    pub fraction: String,
}

impl Decimal {
    /// Build from a finite value. Callers handle NaN and infinities.
    pub fn from_f64(value: f64) -> Self {
        debug_assert!(value.is_finite());

        // f64's Display never switches to exponent notation
        let repr = value.abs().to_string();
        let (integer, fraction) = match repr.split_once('.') {
            Some((int, frac)) => (int.to_string(), frac.to_string()),
            None => (repr, String::new()),
        };

        let mut decimal = Self {
            negative: value.is_sign_negative(),
            integer,
            fraction,
        };
        decimal.normalize();
        decimal
    }

    /// Round to at most `max_fraction` digits, ties away from zero.
    pub fn round_half_expand(mut self, max_fraction: usize) -> Self {
        if self.fraction.len() > max_fraction {
            let round_up = self.fraction.as_bytes()[max_fraction] >= b'5';
            self.fraction.truncate(max_fraction);
            if round_up {
                self.increment_last_digit();
            }
        }
        self.normalize();
        self
    }

    pub fn is_zero(&self) -> bool {
        self.integer.bytes().all(|d| d == b'0') && self.fraction.is_empty()
    }

    /// Add one unit in the last place, carrying into the integer part.
    fn increment_last_digit(&mut self) {
        let mut digits: Vec<u8> = self
            .integer
            .bytes()
            .chain(self.fraction.bytes())
            .collect();
        let mut integer_len = self.integer.len();

        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            integer_len += 1;
        }

        let (integer, fraction) = digits.split_at(integer_len);
        self.integer = integer.iter().map(|&d| d as char).collect();
        self.fraction = fraction.iter().map(|&d| d as char).collect();
    }

    /// Drop trailing fraction zeros and clear the sign on zero.
    fn normalize(&mut self) {
        let kept = self.fraction.trim_end_matches('0').len();
        self.fraction.truncate(kept);

        if self.integer.is_empty() {
            self.integer.push('0');
        }
        if self.is_zero() {
            self.negative = false;
        }
    }
}

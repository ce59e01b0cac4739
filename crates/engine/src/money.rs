use std::{fmt, iter::Sum, num::IntErrorKind, ops::Add, str::FromStr};

use crate::ValidationError;

/// Signed money amount represented as **integer cents**.
///
/// Expense amounts and totals go through this type so sums never drift the
/// way floating-point dollars do. `+` is plain `i64` addition: callers that
/// combine untrusted amounts go through [`Money::checked_add`].
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "$12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<Money>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}${dollars}.{cents:02}")
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidAmount(format!("\"{}\" is not a number", s.trim()));
        let overflow = || ValidationError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingAmount);
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(invalid());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let whole_str = parts.next().ok_or_else(invalid)?;
        let frac_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        // ".5" is a valid number, "." is not.
        let whole_str = match (whole_str.is_empty(), frac_str) {
            (true, Some(frac)) if !frac.is_empty() => "0",
            _ => whole_str,
        };

        if whole_str.is_empty() || !whole_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = whole_str.parse().map_err(|err: std::num::ParseIntError| {
            match err.kind() {
                IntErrorKind::PosOverflow => overflow(),
                _ => invalid(),
            }
        })?;

        let cents: i64 = match frac_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(ValidationError::InvalidAmount(
                            "too many decimals".to_string(),
                        ));
                    }
                }
            }
        };

        let total = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        let signed = if negative {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money(signed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_dollars() {
        assert_eq!(Money::new(0).to_string(), "$0.00");
        assert_eq!(Money::new(1).to_string(), "$0.01");
        assert_eq!(Money::new(10).to_string(), "$0.10");
        assert_eq!(Money::new(120_350).to_string(), "$1203.50");
        assert_eq!(Money::new(-500).to_string(), "-$5.00");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("10,50".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("-0.01".parse::<Money>().unwrap().cents(), -1);
        assert_eq!("+1.00".parse::<Money>().unwrap().cents(), 100);
        assert_eq!("  2.30 ".parse::<Money>().unwrap().cents(), 230);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("7.".parse::<Money>().unwrap().cents(), 700);
    }

    #[test]
    fn parse_rejects_more_than_two_decimals() {
        assert!("12.345".parse::<Money>().is_err());
        assert!("0.001".parse::<Money>().is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(ValidationError::MissingAmount));
        assert_eq!("   ".parse::<Money>(), Err(ValidationError::MissingAmount));
        for raw in ["abc", "1.2.3", ".", "-", "3abc", "1e5", "12 34"] {
            assert!(
                matches!(raw.parse::<Money>(), Err(ValidationError::InvalidAmount(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        let too_large = ValidationError::InvalidAmount("amount too large".to_string());
        assert_eq!("99999999999999999999".parse::<Money>(), Err(too_large.clone()));
        assert_eq!("-99999999999999999999".parse::<Money>(), Err(too_large));
    }

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(
            Money::new(i64::MAX - 1).checked_add(Money::new(1)),
            Some(Money::new(i64::MAX))
        );
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);
        assert_eq!(Money::new(i64::MIN).checked_add(Money::new(-1)), None);
    }

    #[test]
    fn sum_adds_cents() {
        let amounts = [Money::new(350), Money::new(120_000)];
        assert_eq!(amounts.iter().sum::<Money>(), Money::new(120_350));
        assert_eq!(std::iter::empty::<Money>().sum::<Money>(), Money::ZERO);
    }
}

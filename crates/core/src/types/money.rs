//! Money representation and PEN currency formatting.
//!
//! All amounts on the wire are plain JSON numbers in Peruvian soles. The
//! client only formats them for display; arithmetic stays on the server.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An amount in Peruvian soles (PEN).
///
/// Displays with thousands grouping and two decimals, e.g. `S/ 1,234.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// ISO 4217 code of the only currency this client renders.
    pub const CURRENCY: &'static str = "PEN";

    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative();
        let fixed = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        if negative {
            f.write_str("-")?;
        }
        write!(f, "S/ {}.{frac_part}", group_thousands(int_part))
    }
}

/// Insert `,` thousands separators into a plain digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    grouped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pen(s: &str) -> Money {
        Money::new(s.parse().unwrap())
    }

    #[test]
    fn test_zero() {
        assert_eq!(pen("0").to_string(), "S/ 0.00");
    }

    #[test]
    fn test_two_decimals_padded() {
        assert_eq!(pen("5.5").to_string(), "S/ 5.50");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(pen("1234.5").to_string(), "S/ 1,234.50");
        assert_eq!(pen("1000000").to_string(), "S/ 1,000,000.00");
        assert_eq!(pen("999").to_string(), "S/ 999.00");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(pen("10.005").to_string(), "S/ 10.01");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(pen("-150").to_string(), "-S/ 150.00");
    }

    #[test]
    fn test_deserializes_from_json_number() {
        let money: Money = serde_json::from_str("1234.5").unwrap();
        assert_eq!(money.to_string(), "S/ 1,234.50");
    }
}

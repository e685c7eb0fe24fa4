use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A non-negative peso amount in integer centavos.
///
/// Balances, rates and deposits are always `Money`; ledger deltas are plain
/// signed `i64` centavos so a debit and its reversal carry their true sign.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn new(centavos: i64) -> Result<Self, LedgerError> {
        if centavos < 0 {
            return Err(LedgerError::NegativeAmount);
        }
        Ok(Money(centavos))
    }

    pub const fn centavos(self) -> i64 {
        self.0
    }

    pub fn checked_sub(self, other: Money) -> Result<Money, LedgerError> {
        Money::new(self.0 - other.0)
    }

    /// Multiply by `days`, e.g. a daily rate over a rental period.
    pub fn times(self, count: i64) -> Money {
        Money(self.0 * count)
    }

    /// The portion of this amount at a basis-point rate, rounded half-up to
    /// the nearest centavo. 10% of ₱250.00 is exactly ₱25.00.
    pub fn fee_portion(self, rate_bps: i64) -> Money {
        let raw = self.0 as i128 * rate_bps as i128;
        Money(((raw + 5_000) / 10_000) as i64)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{20b1}{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_amounts() {
        assert_eq!(Money::new(-1), Err(LedgerError::NegativeAmount));
        assert_eq!(Money::new(0), Ok(Money::ZERO));
    }

    #[test]
    fn subtract_cannot_go_negative() {
        let a = Money::new(500).unwrap();
        let b = Money::new(600).unwrap();
        assert_eq!(a.checked_sub(b), Err(LedgerError::NegativeAmount));
        assert_eq!(b.checked_sub(a), Ok(Money::new(100).unwrap()));
    }

    #[test]
    fn addition_and_day_multiples() {
        let rate = Money::new(25_000).unwrap();
        assert_eq!(rate + rate, Money::new(50_000).unwrap());
        assert_eq!(rate.times(2), Money::new(50_000).unwrap());
    }

    #[test]
    fn fee_portion_rounds_half_up() {
        // 10% of ₱250.00
        let rate = Money::new(25_000).unwrap();
        assert_eq!(rate.fee_portion(1_000).centavos(), 2_500);
        // 10% of ₱0.05 = 0.5 centavos, rounds up to 1
        assert_eq!(Money::new(5).unwrap().fee_portion(1_000).centavos(), 1);
        // 10% of ₱0.04 = 0.4 centavos, rounds down to 0
        assert_eq!(Money::new(4).unwrap().fee_portion(1_000).centavos(), 0);
    }

    #[test]
    fn displays_as_pesos() {
        assert_eq!(Money::new(100_000).unwrap().to_string(), "\u{20b1}1000.00");
        assert_eq!(Money::new(2_505).unwrap().to_string(), "\u{20b1}25.05");
    }
}

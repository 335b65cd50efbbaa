//! # Rupiah Amounts
//!
//! Escrow amounts are whole Indonesian rupiah: the platform quotes IDR with
//! no minor unit, so an `i64` count of rupiah is exact. All arithmetic is
//! checked: an overflow is a validation error, never a wrap.
//!
//! # Security Invariant
//!
//! Monetary amounts must never be represented as floating-point numbers.
//! Construction rejects negative amounts; the split helper accounts for the
//! odd rupiah explicitly so the two halves always sum to the original.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A non-negative amount of whole Indonesian rupiah.
///
/// Serializes as a bare integer, matching the backend's `amount` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rupiah(i64);

impl Rupiah {
    /// Zero rupiah.
    pub const ZERO: Rupiah = Rupiah(0);

    /// Create an amount from a whole-rupiah count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAmount`] if `amount` is negative.
    pub fn new(amount: i64) -> Result<Self, ValidationError> {
        if amount < 0 {
            return Err(ValidationError::InvalidAmount {
                reason: format!("rupiah amount must not be negative, got {amount}"),
            });
        }
        Ok(Self(amount))
    }

    /// The raw whole-rupiah count.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAmount`] on overflow.
    pub fn checked_add(self, other: Rupiah) -> Result<Rupiah, ValidationError> {
        self.0
            .checked_add(other.0)
            .map(Rupiah)
            .ok_or_else(|| ValidationError::InvalidAmount {
                reason: format!("rupiah addition overflow: {} + {}", self.0, other.0),
            })
    }

    /// Split into a (buyer, seller) pair for split settlements.
    ///
    /// The halves always sum to the original amount; when the amount is odd
    /// the extra rupiah goes to the buyer's refund side.
    pub fn split_half(self) -> (Rupiah, Rupiah) {
        let seller = self.0 / 2;
        let buyer = self.0 - seller;
        (Rupiah(buyer), Rupiah(seller))
    }
}

impl std::fmt::Display for Rupiah {
    /// Format as `Rp1.250.000`, the Indonesian convention with dot
    /// thousands separators and no minor unit.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "Rp{grouped}")
    }
}

impl<'de> Deserialize<'de> for Rupiah {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Rupiah::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_accepts_zero_and_positive() {
        assert!(Rupiah::new(0).is_ok());
        assert!(Rupiah::new(1_250_000).is_ok());
        assert!(Rupiah::new(i64::MAX).is_ok());
    }

    #[test]
    fn new_rejects_negative() {
        assert!(Rupiah::new(-1).is_err());
        assert!(Rupiah::new(i64::MIN).is_err());
    }

    #[test]
    fn display_groups_thousands_with_dots() {
        assert_eq!(Rupiah::new(0).unwrap().to_string(), "Rp0");
        assert_eq!(Rupiah::new(540).unwrap().to_string(), "Rp540");
        assert_eq!(Rupiah::new(540_000).unwrap().to_string(), "Rp540.000");
        assert_eq!(Rupiah::new(1_250_000).unwrap().to_string(), "Rp1.250.000");
        assert_eq!(Rupiah::new(2_499_000).unwrap().to_string(), "Rp2.499.000");
    }

    #[test]
    fn checked_add_sums() {
        let a = Rupiah::new(1_000).unwrap();
        let b = Rupiah::new(250).unwrap();
        assert_eq!(a.checked_add(b).unwrap(), Rupiah::new(1_250).unwrap());
    }

    #[test]
    fn checked_add_rejects_overflow() {
        let a = Rupiah::new(i64::MAX).unwrap();
        let b = Rupiah::new(1).unwrap();
        assert!(a.checked_add(b).is_err());
    }

    #[test]
    fn split_half_even() {
        let (buyer, seller) = Rupiah::new(1_000_000).unwrap().split_half();
        assert_eq!(buyer, Rupiah::new(500_000).unwrap());
        assert_eq!(seller, Rupiah::new(500_000).unwrap());
    }

    #[test]
    fn split_half_odd_favors_buyer() {
        let (buyer, seller) = Rupiah::new(1_000_001).unwrap().split_half();
        assert_eq!(buyer, Rupiah::new(500_001).unwrap());
        assert_eq!(seller, Rupiah::new(500_000).unwrap());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let amount = Rupiah::new(2_499_000).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "2499000");
    }

    #[test]
    fn deserialize_validates_sign() {
        let ok: Result<Rupiah, _> = serde_json::from_str("1250000");
        assert!(ok.is_ok());
        let bad: Result<Rupiah, _> = serde_json::from_str("-5");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn split_halves_always_sum_to_whole(amount in 0i64..=i64::MAX) {
            let total = Rupiah::new(amount).unwrap();
            let (buyer, seller) = total.split_half();
            prop_assert_eq!(buyer.checked_add(seller).unwrap(), total);
            prop_assert!(buyer.as_i64() >= seller.as_i64());
            prop_assert!(buyer.as_i64() - seller.as_i64() <= 1);
        }

        #[test]
        fn display_round_trips_digit_count(amount in 0i64..=i64::MAX) {
            let shown = Rupiah::new(amount).unwrap().to_string();
            let digits: String = shown.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(digits, amount.to_string());
        }
    }
}

//! # Payment Rail Identifiers
//!
//! The rails an escrow can be funded through. QRIS and BI-FAST are the
//! Indonesian national payment rails (quick-response code payments and
//! instant account-to-account transfers respectively); bank transfer covers
//! manual funding.
//!
//! ## Wire Spelling
//!
//! The backend writes `BIFAST` in escrow records but some funding flows
//! submit `BI-FAST`. Serialization always emits the canonical `BIFAST`;
//! deserialization accepts both.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// A payment rail used to fund an escrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// QRIS quick-response code payment.
    #[serde(rename = "QRIS")]
    Qris,
    /// BI-FAST instant transfer (Bank Indonesia).
    #[serde(rename = "BIFAST", alias = "BI-FAST")]
    BiFast,
    /// Manual bank transfer.
    #[serde(rename = "BANK_TRANSFER")]
    BankTransfer,
}

impl PaymentMethod {
    /// All supported rails.
    pub fn all() -> &'static [PaymentMethod] {
        &[Self::Qris, Self::BiFast, Self::BankTransfer]
    }

    /// The canonical wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qris => "QRIS",
            Self::BiFast => "BIFAST",
            Self::BankTransfer => "BANK_TRANSFER",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QRIS" => Ok(Self::Qris),
            "BIFAST" | "BI-FAST" => Ok(Self::BiFast),
            "BANK_TRANSFER" => Ok(Self::BankTransfer),
            _ => Err(ValidationError::UnknownPaymentMethod {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn as_str_all_variants() {
        assert_eq!(PaymentMethod::Qris.as_str(), "QRIS");
        assert_eq!(PaymentMethod::BiFast.as_str(), "BIFAST");
        assert_eq!(PaymentMethod::BankTransfer.as_str(), "BANK_TRANSFER");
    }

    #[test]
    fn serializes_canonical_spelling() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BiFast).unwrap(),
            "\"BIFAST\""
        );
    }

    #[test]
    fn deserializes_both_bifast_spellings() {
        let canonical: PaymentMethod = serde_json::from_str("\"BIFAST\"").unwrap();
        assert_eq!(canonical, PaymentMethod::BiFast);
        let dashed: PaymentMethod = serde_json::from_str("\"BI-FAST\"").unwrap();
        assert_eq!(dashed, PaymentMethod::BiFast);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(PaymentMethod::from_str("qris").unwrap(), PaymentMethod::Qris);
        assert_eq!(
            PaymentMethod::from_str("bi-fast").unwrap(),
            PaymentMethod::BiFast
        );
        assert_eq!(
            PaymentMethod::from_str("bank_transfer").unwrap(),
            PaymentMethod::BankTransfer
        );
    }

    #[test]
    fn from_str_rejects_unknown_rail() {
        assert!(PaymentMethod::from_str("CHEQUE").is_err());
        assert!(PaymentMethod::from_str("").is_err());
    }

    #[test]
    fn all_lists_three_rails() {
        assert_eq!(PaymentMethod::all().len(), 3);
    }

    #[test]
    fn serde_round_trip_all_variants() {
        for method in PaymentMethod::all() {
            let json = serde_json::to_string(method).unwrap();
            let back: PaymentMethod = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *method);
        }
    }
}

//! # Identifier Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the platform.
//! Each identifier is a distinct type — you cannot pass an [`EscrowId`]
//! where a [`DisputeId`] is expected.
//!
//! ## Validation
//!
//! The backend issues opaque string identifiers (`ESC-1029`, `DSP-1`, or
//! UUIDs depending on deployment). This client-side model does not assume a
//! shape beyond what every observed form satisfies: non-empty, no
//! whitespace, printable ASCII. Validation happens at construction time and
//! again at deserialization, so an invalid identifier can never enter the
//! domain model through a backend response.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! string_identifier {
    ($(#[$doc:meta])* $ty:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        pub struct $ty(String);

        impl $ty {
            /// Create an identifier, validating the backend-issued string.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::InvalidIdentifier`] if the input
            /// is empty, contains whitespace, or contains non-printable
            /// characters.
            pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
                let raw = raw.into();
                validate_identifier($kind, &raw)?;
                Ok(Self(raw))
            }

            /// Access the underlying string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl_validating_deserialize!($ty);
    };
}

string_identifier!(
    /// A unique identifier for an escrow transaction, as issued by the
    /// backend (e.g. `ESC-1029`).
    EscrowId,
    "escrow"
);

string_identifier!(
    /// A unique identifier for a dispute proceeding, as issued by the
    /// backend (e.g. `DSP-1`).
    DisputeId,
    "dispute"
);

string_identifier!(
    /// A unique identifier for a platform user account.
    UserId,
    "user"
);

/// Validate the shared identifier shape: non-empty, no whitespace,
/// printable ASCII only.
fn validate_identifier(kind: &'static str, raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::InvalidIdentifier {
            kind,
            reason: "must not be empty".to_string(),
        });
    }
    if raw.chars().any(|c| c.is_whitespace()) {
        return Err(ValidationError::InvalidIdentifier {
            kind,
            reason: format!("must not contain whitespace: '{raw}'"),
        });
    }
    if !raw.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ValidationError::InvalidIdentifier {
            kind,
            reason: format!("must be printable ASCII: '{raw}'"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn escrow_id_accepts_backend_forms() {
        assert!(EscrowId::new("ESC-1029").is_ok());
        assert!(EscrowId::new("9f2c1f6e-0b2a-4c1e-9d7a-1a2b3c4d5e6f").is_ok());
        assert!(EscrowId::new("esc_001").is_ok());
    }

    #[test]
    fn escrow_id_rejects_empty() {
        assert!(EscrowId::new("").is_err());
    }

    #[test]
    fn escrow_id_rejects_whitespace() {
        assert!(EscrowId::new("ESC 1029").is_err());
        assert!(EscrowId::new(" ESC-1029").is_err());
    }

    #[test]
    fn escrow_id_rejects_non_ascii() {
        assert!(EscrowId::new("ESC-1029\u{7}").is_err());
        assert!(EscrowId::new("ésc-1").is_err());
    }

    #[test]
    fn identifiers_are_distinct_types() {
        // Compile-time property: this test documents that EscrowId and
        // DisputeId cannot be interchanged. Runtime check on the strings.
        let e = EscrowId::new("ESC-1").unwrap();
        let d = DisputeId::new("ESC-1").unwrap();
        assert_eq!(e.as_str(), d.as_str());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let id = EscrowId::new("ESC-1030").unwrap();
        let back = EscrowId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn serialize_as_plain_string() {
        let id = DisputeId::new("DSP-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"DSP-1\"");
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<UserId, _> = serde_json::from_str("\"u-123\"");
        assert!(ok.is_ok());
        let bad: Result<UserId, _> = serde_json::from_str("\"has space\"");
        assert!(bad.is_err());
        let empty: Result<UserId, _> = serde_json::from_str("\"\"");
        assert!(empty.is_err());
    }

    #[test]
    fn as_ref_matches_as_str() {
        let id = UserId::new("u1").unwrap();
        assert_eq!(id.as_ref(), id.as_str());
    }
}

//! Validation errors for domain-primitive construction.

/// Errors raised when a domain primitive rejects its input.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// An identifier string failed format validation.
    #[error("invalid {kind} identifier: {reason}")]
    InvalidIdentifier {
        /// Which identifier type rejected the input ("escrow", "dispute", "user").
        kind: &'static str,
        /// Description of the validation failure.
        reason: String,
    },

    /// A monetary amount was out of range.
    #[error("invalid amount: {reason}")]
    InvalidAmount {
        /// Description of the validation failure.
        reason: String,
    },

    /// A payment method string was not a recognized rail identifier.
    #[error("unknown payment method: {value}")]
    UnknownPaymentMethod {
        /// The unrecognized input.
        value: String,
    },

    /// A role string was not one of buyer/seller/admin.
    #[error("unknown role: {value}")]
    UnknownRole {
        /// The unrecognized input.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let err = ValidationError::InvalidIdentifier {
            kind: "escrow",
            reason: "must not be empty".to_string(),
        };
        assert!(err.to_string().contains("escrow"));
        assert!(err.to_string().contains("must not be empty"));

        let err = ValidationError::InvalidAmount {
            reason: "negative".to_string(),
        };
        assert!(err.to_string().contains("negative"));

        let err = ValidationError::UnknownPaymentMethod {
            value: "CHEQUE".to_string(),
        };
        assert!(err.to_string().contains("CHEQUE"));

        let err = ValidationError::UnknownRole {
            value: "auditor".to_string(),
        };
        assert!(err.to_string().contains("auditor"));
    }
}

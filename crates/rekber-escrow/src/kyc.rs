//! # Seller KYC State
//!
//! Sellers must pass identity verification before they may ship against a
//! funded escrow. A seller submits their legal name, national ID number
//! (KTP or passport), a document scan URL, and a selfie URL; an admin then
//! verifies or rejects the submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use rekber_core::UserId;

/// A seller's identity-verification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    /// Nothing submitted yet.
    Unverified,
    /// Submission awaiting admin review.
    Submitted,
    /// Admin approved; the seller may ship.
    Verified,
    /// Admin rejected; the seller must resubmit.
    Rejected,
}

impl KycStatus {
    /// The canonical wire name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Submitted => "submitted",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }

    /// Whether this state permits shipping.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for KycStatus {
    fn default() -> Self {
        Self::Unverified
    }
}

/// The viewer's own KYC profile, as returned by `GET /users/me/kyc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycProfile {
    /// Current verification state.
    #[serde(default)]
    pub status: KycStatus,
    /// Verification tier label, when the deployment uses tiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// When the latest submission was made (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl KycProfile {
    /// Whether this profile clears the shipping gate.
    pub fn is_verified(&self) -> bool {
        self.status.is_verified()
    }
}

/// A KYC submission payload.
///
/// Document and selfie are hosted URLs; the upload itself is backend
/// plumbing outside this client's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycSubmission {
    /// The seller's legal name.
    pub full_name: String,
    /// National ID number (KTP) or passport number.
    pub id_number: String,
    /// URL of the ID document scan.
    pub document_url: String,
    /// URL of a selfie holding the ID.
    pub selfie_url: String,
}

impl KycSubmission {
    /// Validate that every field is present and non-blank.
    ///
    /// Mirrors the submission form's required-field checks; the backend
    /// revalidates.
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("full name is required".to_string());
        }
        if self.id_number.trim().is_empty() {
            return Err("ID number is required".to_string());
        }
        if self.document_url.trim().is_empty() {
            return Err("document URL is required".to_string());
        }
        if self.selfie_url.trim().is_empty() {
            return Err("selfie URL is required".to_string());
        }
        Ok(())
    }
}

/// A full KYC submission as seen by a reviewing admin
/// (`GET /users/:id/kyc`).
///
/// Every field is optional: deployments differ in how much of the
/// submission the detail endpoint echoes back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KycRecord {
    /// The seller's legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// National ID number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    /// URL of the ID document scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    /// URL of the selfie holding the ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selfie_url: Option<String>,
    /// Submission state.
    #[serde(default)]
    pub status: KycStatus,
    /// When the submission was made (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// A row in the admin's pending-KYC review queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingKycSeller {
    /// The seller awaiting review.
    pub id: UserId,
    /// The seller's login email, when the listing includes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Submission state (normally `submitted`).
    #[serde(default)]
    pub status: KycStatus,
    /// When the submission was made (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> KycSubmission {
        KycSubmission {
            full_name: "Budi Santoso".to_string(),
            id_number: "3171234567890001".to_string(),
            document_url: "https://cdn.example.id/ktp.jpg".to_string(),
            selfie_url: "https://cdn.example.id/selfie.jpg".to_string(),
        }
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(KycStatus::Unverified.as_str(), "unverified");
        assert_eq!(KycStatus::Submitted.as_str(), "submitted");
        assert_eq!(KycStatus::Verified.as_str(), "verified");
        assert_eq!(KycStatus::Rejected.as_str(), "rejected");
    }

    #[test]
    fn only_verified_clears_the_gate() {
        assert!(KycStatus::Verified.is_verified());
        assert!(!KycStatus::Unverified.is_verified());
        assert!(!KycStatus::Submitted.is_verified());
        assert!(!KycStatus::Rejected.is_verified());
    }

    #[test]
    fn default_status_is_unverified() {
        assert_eq!(KycStatus::default(), KycStatus::Unverified);
    }

    #[test]
    fn profile_defaults_status_when_backend_omits_it() {
        let profile: KycProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.status, KycStatus::Unverified);
        assert!(!profile.is_verified());
    }

    #[test]
    fn profile_deserializes_backend_shape() {
        let profile: KycProfile = serde_json::from_str(
            r#"{"status":"verified","level":"full","submitted_at":"2026-02-20T09:00:00Z"}"#,
        )
        .unwrap();
        assert!(profile.is_verified());
        assert_eq!(profile.level.as_deref(), Some("full"));
    }

    #[test]
    fn submission_validates_required_fields() {
        assert!(submission().validate().is_ok());

        let mut s = submission();
        s.full_name = "  ".to_string();
        assert!(s.validate().is_err());

        let mut s = submission();
        s.id_number = String::new();
        assert!(s.validate().is_err());

        let mut s = submission();
        s.document_url = String::new();
        assert!(s.validate().is_err());

        let mut s = submission();
        s.selfie_url = String::new();
        assert!(s.validate().is_err());
    }

    #[test]
    fn pending_seller_deserializes_sparse_row() {
        let row: PendingKycSeller =
            serde_json::from_str(r#"{"id":"u-77","status":"submitted"}"#).unwrap();
        assert_eq!(row.status, KycStatus::Submitted);
        assert!(row.email.is_none());
        assert!(row.submitted_at.is_none());
    }

    #[test]
    fn kyc_record_tolerates_empty_object() {
        let record: KycRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.status, KycStatus::Unverified);
        assert!(record.full_name.is_none());
    }

    #[test]
    fn kyc_record_deserializes_full_submission() {
        let record: KycRecord = serde_json::from_str(
            r#"{
                "full_name": "Budi Santoso",
                "id_number": "3171234567890001",
                "document_url": "/uploads/ktp.jpg",
                "selfie_url": "/uploads/selfie.jpg",
                "status": "submitted",
                "submitted_at": "2026-02-20T09:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(record.full_name.as_deref(), Some("Budi Santoso"));
        assert_eq!(record.status, KycStatus::Submitted);
    }
}

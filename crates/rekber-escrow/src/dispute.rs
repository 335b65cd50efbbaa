//! # Disputes
//!
//! A buyer may open a dispute against an escrow that is `shipped` or
//! `delivered`. While the dispute is open the escrow sits in `disputed` and
//! only an admin resolution can move it: refund, release, or split
//! settlement. One dispute per escrow at a time (enforced by the backend;
//! mirrored here in the gating context).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use rekber_core::{DisputeId, EscrowId};

use crate::status::EscrowStatus;

/// The state of a dispute proceeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeStatus {
    /// Filed and awaiting admin adjudication.
    Open,
    /// Adjudicated with a resolution (terminal).
    Resolved,
    /// Rejected without affecting the escrow (terminal).
    Rejected,
}

impl DisputeStatus {
    /// The canonical wire name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }
}

impl fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An admin's decision on an open dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Refund the buyer in full.
    FavorBuyer,
    /// Release the escrowed funds to the seller.
    FavorSeller,
    /// Split the settlement between the parties.
    Split,
}

impl Resolution {
    /// All decisions.
    pub fn all() -> &'static [Resolution] {
        &[Self::FavorBuyer, Self::FavorSeller, Self::Split]
    }

    /// The canonical wire name of this decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FavorBuyer => "favor_buyer",
            Self::FavorSeller => "favor_seller",
            Self::Split => "split",
        }
    }

    /// The terminal escrow status this decision moves the escrow into.
    pub fn escrow_status(&self) -> EscrowStatus {
        match self {
            Self::FavorBuyer => EscrowStatus::ResolvedRefund,
            Self::FavorSeller => EscrowStatus::ResolvedRelease,
            Self::Split => EscrowStatus::ResolvedSplit,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favor_buyer" => Ok(Self::FavorBuyer),
            "favor_seller" => Ok(Self::FavorSeller),
            "split" => Ok(Self::Split),
            other => Err(format!("unknown resolution decision: {other}")),
        }
    }
}

/// A dispute record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    /// Backend-issued dispute identifier.
    pub id: DisputeId,
    /// The escrow under dispute.
    pub escrow_id: EscrowId,
    /// Why the dispute was opened (e.g. `item_not_as_described`).
    pub reason: String,
    /// Free-text elaboration supplied at filing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Current proceeding state.
    pub status: DisputeStatus,
    /// When the dispute was filed (UTC).
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn dispute_status_wire_names() {
        assert_eq!(serde_json::to_string(&DisputeStatus::Open).unwrap(), "\"open\"");
        assert_eq!(
            serde_json::to_string(&DisputeStatus::Resolved).unwrap(),
            "\"resolved\""
        );
        assert_eq!(
            serde_json::to_string(&DisputeStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn dispute_status_terminality() {
        assert!(!DisputeStatus::Open.is_terminal());
        assert!(DisputeStatus::Resolved.is_terminal());
        assert!(DisputeStatus::Rejected.is_terminal());
    }

    #[test]
    fn resolution_maps_to_terminal_escrow_status() {
        assert_eq!(
            Resolution::FavorBuyer.escrow_status(),
            EscrowStatus::ResolvedRefund
        );
        assert_eq!(
            Resolution::FavorSeller.escrow_status(),
            EscrowStatus::ResolvedRelease
        );
        assert_eq!(Resolution::Split.escrow_status(), EscrowStatus::ResolvedSplit);
        for decision in Resolution::all() {
            assert!(decision.escrow_status().is_terminal());
            assert!(decision.escrow_status().is_resolved());
        }
    }

    #[test]
    fn resolution_wire_names_round_trip() {
        for decision in Resolution::all() {
            let json = serde_json::to_string(decision).unwrap();
            assert_eq!(json, format!("\"{}\"", decision.as_str()));
            let back: Resolution = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *decision);
            assert_eq!(Resolution::from_str(decision.as_str()).unwrap(), *decision);
        }
        assert!(Resolution::from_str("refund").is_err());
    }

    #[test]
    fn dispute_serde_round_trip() {
        let dispute = Dispute {
            id: DisputeId::new("DSP-1").unwrap(),
            escrow_id: EscrowId::new("ESC-1030").unwrap(),
            reason: "item_not_as_described".to_string(),
            note: Some("Arrived with a cracked screen".to_string()),
            status: DisputeStatus::Open,
            created_at: "2026-03-02T10:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&dispute).unwrap();
        let back: Dispute = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dispute);
    }

    #[test]
    fn dispute_note_omitted_when_absent() {
        let dispute = Dispute {
            id: DisputeId::new("DSP-2").unwrap(),
            escrow_id: EscrowId::new("ESC-1").unwrap(),
            reason: "not_received".to_string(),
            note: None,
            status: DisputeStatus::Open,
            created_at: "2026-03-02T10:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&dispute).unwrap();
        assert!(!json.contains("note"));
    }
}

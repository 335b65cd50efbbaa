//! # Escrow Records
//!
//! The escrow record as returned by the backend. The backend is the
//! authority on `status`; this type carries what it reports, and the
//! [`gating`](crate::gating) module answers what the viewer may do with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rekber_core::{EscrowId, PaymentMethod, Rupiah, UserId};

use crate::status::EscrowStatus;

/// A held-funds transaction between a buyer and a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Escrow {
    /// Backend-issued escrow identifier.
    pub id: EscrowId,
    /// The buying party. Absent on records created by a seller before any
    /// buyer has funded them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<UserId>,
    /// The selling party.
    pub seller: UserId,
    /// Escrowed amount in whole rupiah.
    pub amount: Rupiah,
    /// Current lifecycle status (backend-authoritative).
    pub status: EscrowStatus,
    /// Rail the escrow was (or will be) funded through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// When the escrow was created (UTC).
    pub created_at: DateTime<Utc>,
}

impl Escrow {
    /// Whether the observed move from this record's status to `next` is a
    /// legal transition. Used to sanity-check a re-fetched record after a
    /// mutating call; a violation indicates a backend inconsistency worth
    /// logging, not a client state to correct.
    pub fn observes_legal_transition(&self, next: EscrowStatus) -> bool {
        self.status == next || self.status.can_transition_to(next)
    }
}

//! # Dispute Endpoints
//!
//! Evidence submission by either party and admin resolution. Opening a
//! dispute is an escrow operation (`POST /escrow/:id/dispute`) and lives in
//! the [`escrow`](crate::escrow) family.

use serde::Serialize;

use rekber_core::DisputeId;
use rekber_escrow::{Dispute, Resolution};

use crate::client::ApiClient;
use crate::error::ClientError;

/// Payload for `POST /disputes/:id/evidence`.
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceSubmission {
    /// Hosted URL of the evidence photo or video.
    pub file_url: String,
    /// Optional description of what the evidence shows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResolveRequest<'a> {
    decision: Resolution,
    note: &'a str,
}

impl ApiClient {
    /// `POST /disputes/:id/evidence`: attach evidence to an open dispute.
    pub async fn submit_evidence(
        &self,
        id: &DisputeId,
        evidence: &EvidenceSubmission,
    ) -> Result<Dispute, ClientError> {
        if evidence.file_url.trim().is_empty() {
            return Err(ClientError::InvalidRequest {
                reason: "evidence file URL is required".to_string(),
            });
        }
        let endpoint = format!("/disputes/{id}/evidence");
        let request = self.authed(self.post(&endpoint))?.json(evidence);
        self.execute(request, &endpoint, true).await
    }

    /// `POST /disputes/:id/resolve`: issue the admin's final decision.
    ///
    /// A resolution note is mandatory: the decision releases, refunds, or
    /// splits real funds and the note is its audit trail.
    pub async fn resolve_dispute(
        &self,
        id: &DisputeId,
        decision: Resolution,
        note: &str,
    ) -> Result<Dispute, ClientError> {
        if note.trim().is_empty() {
            return Err(ClientError::InvalidRequest {
                reason: "a resolution note is required".to_string(),
            });
        }
        let endpoint = format!("/disputes/{id}/resolve");
        let request = self
            .authed(self.post(&endpoint))?
            .json(&ResolveRequest { decision, note });
        self.execute(request, &endpoint, true).await
    }
}

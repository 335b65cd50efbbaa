//! # Escrow Endpoints
//!
//! Listing, creation, and the buyer/seller lifecycle operations. Every
//! mutating call returns what the backend sent back, but the status that
//! matters is the one a follow-up [`get_escrow`](ApiClient::get_escrow)
//! reports: the backend is authoritative and callers re-fetch after
//! acting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rekber_core::{EscrowId, PaymentMethod, Rupiah, UserId};
use rekber_escrow::{Dispute, Escrow};

use crate::client::ApiClient;
use crate::error::ClientError;

/// Payload for `POST /escrow`.
///
/// The create endpoint predates the backend's snake_case convention and
/// still takes camelCase keys.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEscrowRequest {
    /// The seller the escrow is opened against.
    #[serde(rename = "sellerId")]
    pub seller_id: UserId,
    /// Escrowed amount in whole rupiah.
    pub amount: Rupiah,
    /// Deadline for the buyer's receipt confirmation.
    #[serde(rename = "deadlineConfirm")]
    pub deadline_confirm: DateTime<Utc>,
}

/// Payload for `POST /escrow/:id/fund`.
#[derive(Debug, Clone, Serialize)]
pub struct FundingInstruction {
    /// Rail the payment was made through.
    pub method: PaymentMethod,
    /// Payment-gateway reference for reconciliation.
    pub pg_reference: String,
    /// QR code URL, for QRIS payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_url: Option<String>,
}

impl FundingInstruction {
    /// Build an instruction with a fresh gateway reference
    /// (`TXN-<uuid>`), matching how the payment page generates one per
    /// submission attempt.
    pub fn with_generated_reference(method: PaymentMethod) -> Self {
        Self {
            method,
            pg_reference: format!("TXN-{}", Uuid::new_v4().simple()),
            qr_code_url: None,
        }
    }

    /// Attach a QR code URL.
    pub fn with_qr_code_url(mut self, url: impl Into<String>) -> Self {
        self.qr_code_url = Some(url.into());
        self
    }
}

/// Payload for `POST /escrow/:id/ship`.
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentRequest {
    /// Courier receipt number (e.g. `JNE123456789`).
    pub shipping_receipt: String,
}

/// Response of `POST /escrow/:id/ship`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentReceipt {
    /// Tracking number assigned by the backend; falls back to the
    /// submitted receipt number on older deployments.
    #[serde(default)]
    pub tracking_number: Option<String>,
}

/// Payload for `POST /escrow/:id/receipt`.
#[derive(Debug, Clone, Serialize)]
pub struct ProofUpload {
    /// Hosted URL of the proof photo or video.
    pub proof_url: String,
    /// Optional description of what the proof shows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payload for `POST /escrow/:id/dispute`.
#[derive(Debug, Clone, Serialize)]
pub struct DisputeRequest {
    /// Why the dispute is opened (e.g. `item_not_as_described`).
    pub reason: String,
    /// Free-text elaboration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ApiClient {
    /// `GET /escrow`: the viewer's escrows.
    pub async fn list_escrows(&self) -> Result<Vec<Escrow>, ClientError> {
        let endpoint = "/escrow";
        let request = self.authed(self.get(endpoint))?;
        self.execute(request, endpoint, true).await
    }

    /// `GET /escrow/:id`: one escrow, with its authoritative status.
    pub async fn get_escrow(&self, id: &EscrowId) -> Result<Escrow, ClientError> {
        let endpoint = format!("/escrow/{id}");
        let request = self.authed(self.get(&endpoint))?;
        self.execute(request, &endpoint, true).await
    }

    /// `POST /escrow`: open a new escrow (buyer).
    pub async fn create_escrow(&self, input: &CreateEscrowRequest) -> Result<Escrow, ClientError> {
        let endpoint = "/escrow";
        let request = self.authed(self.post(endpoint))?.json(input);
        self.execute(request, endpoint, true).await
    }

    /// `POST /escrow/:id/fund`: submit the buyer's funding details.
    pub async fn fund_escrow(
        &self,
        id: &EscrowId,
        instruction: &FundingInstruction,
    ) -> Result<Escrow, ClientError> {
        if instruction.pg_reference.is_empty() {
            return Err(ClientError::InvalidRequest {
                reason: "pg_reference must not be empty".to_string(),
            });
        }
        let endpoint = format!("/escrow/{id}/fund");
        let request = self.authed(self.post(&endpoint))?.json(instruction);
        self.execute(request, &endpoint, true).await
    }

    /// `POST /escrow/:id/ship`: submit the seller's shipping receipt.
    ///
    /// The backend enforces the funded-status and KYC gates; preflight them
    /// with `rekber_escrow::is_action_allowed` to avoid a doomed request.
    pub async fn ship_escrow(
        &self,
        id: &EscrowId,
        shipment: &ShipmentRequest,
    ) -> Result<ShipmentReceipt, ClientError> {
        if shipment.shipping_receipt.trim().is_empty() {
            return Err(ClientError::InvalidRequest {
                reason: "shipping receipt is required".to_string(),
            });
        }
        let endpoint = format!("/escrow/{id}/ship");
        let request = self.authed(self.post(&endpoint))?.json(shipment);
        self.execute(request, &endpoint, true).await
    }

    /// `POST /escrow/:id/receipt`: upload the buyer's receipt proof.
    pub async fn upload_receipt_proof(
        &self,
        id: &EscrowId,
        proof: &ProofUpload,
    ) -> Result<Escrow, ClientError> {
        if proof.proof_url.trim().is_empty() {
            return Err(ClientError::InvalidRequest {
                reason: "proof URL is required".to_string(),
            });
        }
        let endpoint = format!("/escrow/{id}/receipt");
        let request = self.authed(self.post(&endpoint))?.json(proof);
        self.execute(request, &endpoint, true).await
    }

    /// `POST /escrow/:id/confirm`: the buyer confirms receipt.
    pub async fn confirm_receipt(&self, id: &EscrowId) -> Result<Escrow, ClientError> {
        let endpoint = format!("/escrow/{id}/confirm");
        let request = self.authed(self.post(&endpoint))?;
        self.execute(request, &endpoint, true).await
    }

    /// `POST /escrow/:id/dispute`: the buyer opens a dispute.
    pub async fn open_dispute(
        &self,
        id: &EscrowId,
        dispute: &DisputeRequest,
    ) -> Result<Dispute, ClientError> {
        if dispute.reason.trim().is_empty() {
            return Err(ClientError::InvalidRequest {
                reason: "dispute reason is required".to_string(),
            });
        }
        let endpoint = format!("/escrow/{id}/dispute");
        let request = self.authed(self.post(&endpoint))?.json(dispute);
        self.execute(request, &endpoint, true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_camel_case_keys() {
        let request = CreateEscrowRequest {
            seller_id: UserId::new("toko-andalas").unwrap(),
            amount: Rupiah::new(1_250_000).unwrap(),
            deadline_confirm: "2026-03-10T00:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"sellerId\""));
        assert!(json.contains("\"deadlineConfirm\""));
        assert!(json.contains("\"amount\":1250000"));
    }

    #[test]
    fn funding_instruction_generates_txn_reference() {
        let instruction = FundingInstruction::with_generated_reference(PaymentMethod::Qris);
        assert!(instruction.pg_reference.starts_with("TXN-"));
        assert!(instruction.pg_reference.len() > 4);
        assert!(instruction.qr_code_url.is_none());

        let other = FundingInstruction::with_generated_reference(PaymentMethod::Qris);
        assert_ne!(instruction.pg_reference, other.pg_reference);
    }

    #[test]
    fn funding_instruction_omits_absent_qr_url() {
        let instruction = FundingInstruction {
            method: PaymentMethod::BiFast,
            pg_reference: "TXN-1".to_string(),
            qr_code_url: None,
        };
        let json = serde_json::to_string(&instruction).unwrap();
        assert!(!json.contains("qr_code_url"));
        assert!(json.contains("\"BIFAST\""));
    }

    #[test]
    fn funding_instruction_with_qr_url() {
        let instruction = FundingInstruction::with_generated_reference(PaymentMethod::Qris)
            .with_qr_code_url("https://pg.example.id/qr/123");
        let json = serde_json::to_string(&instruction).unwrap();
        assert!(json.contains("qr_code_url"));
    }

    #[test]
    fn shipment_receipt_tolerates_missing_tracking_number() {
        let receipt: ShipmentReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.tracking_number.is_none());
        let receipt: ShipmentReceipt =
            serde_json::from_str(r#"{"tracking_number":"JNE123"}"#).unwrap();
        assert_eq!(receipt.tracking_number.as_deref(), Some("JNE123"));
    }

    #[test]
    fn dispute_request_omits_absent_note() {
        let request = DisputeRequest {
            reason: "item_not_as_described".to_string(),
            note: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("note"));
    }
}

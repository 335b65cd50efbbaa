//! # KYC Endpoints
//!
//! The seller's own verification flow (`/users/me/kyc`) and the admin
//! review queue (`/users/kyc/pending`, `/users/:id/kyc`).

use serde::Serialize;

use rekber_core::UserId;
use rekber_escrow::{KycProfile, KycRecord, KycStatus, KycSubmission, PendingKycSeller};

use crate::client::ApiClient;
use crate::error::ClientError;

/// Page parameters for the pending-KYC queue.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KycPage {
    /// Maximum rows to return.
    pub limit: u32,
    /// Rows to skip.
    pub offset: u32,
}

impl Default for KycPage {
    fn default() -> Self {
        // The admin dashboard pages twenty at a time.
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

#[derive(Debug, Serialize)]
struct ReviewRequest {
    status: KycStatus,
}

impl ApiClient {
    /// `GET /users/me/kyc`: the viewer's own verification state.
    pub async fn my_kyc_status(&self) -> Result<KycProfile, ClientError> {
        let endpoint = "/users/me/kyc";
        let request = self.authed(self.get(endpoint))?;
        self.execute(request, endpoint, true).await
    }

    /// `POST /users/me/kyc`: submit identity documents for review.
    pub async fn submit_kyc(&self, submission: &KycSubmission) -> Result<KycProfile, ClientError> {
        submission
            .validate()
            .map_err(|reason| ClientError::InvalidRequest { reason })?;
        let endpoint = "/users/me/kyc";
        let request = self.authed(self.post(endpoint))?.json(submission);
        self.execute(request, endpoint, true).await
    }

    /// `GET /users/kyc/pending`: sellers awaiting review (admin).
    pub async fn pending_kyc(&self, page: KycPage) -> Result<Vec<PendingKycSeller>, ClientError> {
        let endpoint = "/users/kyc/pending";
        let request = self
            .authed(self.get(endpoint))?
            .query(&[("limit", page.limit), ("offset", page.offset)]);
        self.execute(request, endpoint, true).await
    }

    /// `GET /users/:id/kyc`: one seller's full submission (admin).
    pub async fn user_kyc_details(&self, id: &UserId) -> Result<KycRecord, ClientError> {
        let endpoint = format!("/users/{id}/kyc");
        let request = self.authed(self.get(&endpoint))?;
        self.execute(request, &endpoint, true).await
    }

    /// `POST /users/:id/kyc`: verify or reject a submission (admin).
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidRequest`] unless `verdict` is
    /// [`KycStatus::Verified`] or [`KycStatus::Rejected`]: a review can
    /// only conclude, not un-submit.
    pub async fn review_kyc(
        &self,
        id: &UserId,
        verdict: KycStatus,
    ) -> Result<KycProfile, ClientError> {
        if !matches!(verdict, KycStatus::Verified | KycStatus::Rejected) {
            return Err(ClientError::InvalidRequest {
                reason: format!("review verdict must be verified or rejected, got {verdict}"),
            });
        }
        let endpoint = format!("/users/{id}/kyc");
        let request = self
            .authed(self.post(&endpoint))?
            .json(&ReviewRequest { status: verdict });
        self.execute(request, &endpoint, true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_matches_dashboard() {
        let page = KycPage::default();
        assert_eq!(page.limit, 20);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn review_request_shape() {
        let json = serde_json::to_string(&ReviewRequest {
            status: KycStatus::Verified,
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"verified"}"#);
    }
}

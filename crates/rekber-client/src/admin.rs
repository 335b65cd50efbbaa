//! # Admin Endpoints
//!
//! The platform-wide escrow listing and the funds-release operation. The
//! backend enforces the admin role; a non-admin token gets a plain 403
//! (which does not force a logout; see [`crate::client`]).

use rekber_core::EscrowId;
use rekber_escrow::Escrow;

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// `GET /admin/escrows`: every escrow on the platform.
    pub async fn admin_list_escrows(&self) -> Result<Vec<Escrow>, ClientError> {
        let endpoint = "/admin/escrows";
        let request = self.authed(self.get(endpoint))?;
        self.execute(request, endpoint, true).await
    }

    /// `POST /admin/escrows/:id/release`: release a delivered escrow's
    /// funds to the seller.
    pub async fn admin_release(&self, id: &EscrowId) -> Result<Escrow, ClientError> {
        let endpoint = format!("/admin/escrows/{id}/release");
        let request = self.authed(self.post(&endpoint))?;
        self.execute(request, &endpoint, true).await
    }
}

//! # Status-Gated Action Resolver
//!
//! Given an escrow's current status and what is known about the viewer,
//! decide which actions are available, and for a given action, which
//! status the backend is expected to report next. These are pure functions:
//! nothing here performs I/O or advances state.
//!
//! ## Rules
//!
//! | Action | Role | Status gate | Extra gate |
//! |---|---|---|---|
//! | fund | buyer | `pending_payment` | - |
//! | ship | seller | `funded` | seller KYC verified |
//! | upload_proof | buyer | `shipped`, `delivered` | - |
//! | confirm_receipt | buyer | `shipped`, `delivered` | receipt proof uploaded |
//! | open_dispute | buyer | `shipped`, `delivered` | no dispute already open |
//! | release | admin | `delivered` | - |
//! | resolve | admin | `disputed` | - |
//!
//! While an escrow is `disputed`, every buyer and seller action is disabled;
//! only admin resolution remains.

use serde::{Deserialize, Serialize};
use std::fmt;

use rekber_core::Role;

use crate::dispute::Resolution;
use crate::error::EscrowError;
use crate::status::EscrowStatus;

/// An action a viewer can take against an escrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscrowAction {
    /// Buyer pays into the escrow.
    Fund,
    /// Seller ships and submits a shipping receipt.
    Ship,
    /// Buyer uploads a receipt proof ahead of confirmation.
    UploadProof,
    /// Buyer confirms the goods arrived.
    ConfirmReceipt,
    /// Buyer opens a dispute.
    OpenDispute,
    /// Admin releases funds to the seller.
    Release,
    /// Admin resolves an open dispute.
    Resolve,
}

impl EscrowAction {
    /// All actions.
    pub fn all() -> &'static [EscrowAction] {
        &[
            Self::Fund,
            Self::Ship,
            Self::UploadProof,
            Self::ConfirmReceipt,
            Self::OpenDispute,
            Self::Release,
            Self::Resolve,
        ]
    }

    /// The canonical wire name of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fund => "fund",
            Self::Ship => "ship",
            Self::UploadProof => "upload_proof",
            Self::ConfirmReceipt => "confirm_receipt",
            Self::OpenDispute => "open_dispute",
            Self::Release => "release",
            Self::Resolve => "resolve",
        }
    }

    /// The role that may perform this action.
    pub fn required_role(&self) -> Role {
        match self {
            Self::Fund | Self::UploadProof | Self::ConfirmReceipt | Self::OpenDispute => {
                Role::Buyer
            }
            Self::Ship => Role::Seller,
            Self::Release | Self::Resolve => Role::Admin,
        }
    }
}

impl fmt::Display for EscrowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What is known about the viewer when resolving available actions.
///
/// The flags mirror what the UI knows before enabling a button: the
/// viewer's KYC state, whether a receipt proof has been uploaded for this
/// escrow, and whether a dispute is already open against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    /// The viewer's role.
    pub role: Role,
    /// Whether the viewer's KYC is verified (gates seller shipping).
    pub kyc_verified: bool,
    /// Whether the buyer has uploaded a receipt proof for this escrow
    /// (gates confirmation).
    pub receipt_proof_uploaded: bool,
    /// Whether a dispute is already open against this escrow (gates
    /// opening another).
    pub dispute_open: bool,
}

impl ActionContext {
    /// Context for a viewer with no extra facts established.
    pub fn for_role(role: Role) -> Self {
        Self {
            role,
            kyc_verified: false,
            receipt_proof_uploaded: false,
            dispute_open: false,
        }
    }

    /// Set the KYC-verified flag.
    pub fn with_kyc_verified(mut self, verified: bool) -> Self {
        self.kyc_verified = verified;
        self
    }

    /// Set the receipt-proof-uploaded flag.
    pub fn with_receipt_proof(mut self, uploaded: bool) -> Self {
        self.receipt_proof_uploaded = uploaded;
        self
    }

    /// Set the dispute-open flag.
    pub fn with_open_dispute(mut self, open: bool) -> Self {
        self.dispute_open = open;
        self
    }
}

/// Whether `action` is available to the viewer described by `ctx` against
/// an escrow in `status`.
pub fn is_action_allowed(status: EscrowStatus, action: EscrowAction, ctx: &ActionContext) -> bool {
    if ctx.role != action.required_role() {
        return false;
    }
    match action {
        EscrowAction::Fund => status == EscrowStatus::PendingPayment,
        EscrowAction::Ship => status == EscrowStatus::Funded && ctx.kyc_verified,
        EscrowAction::UploadProof => {
            matches!(status, EscrowStatus::Shipped | EscrowStatus::Delivered)
        }
        EscrowAction::ConfirmReceipt => {
            matches!(status, EscrowStatus::Shipped | EscrowStatus::Delivered)
                && ctx.receipt_proof_uploaded
        }
        EscrowAction::OpenDispute => {
            matches!(status, EscrowStatus::Shipped | EscrowStatus::Delivered)
                && !ctx.dispute_open
        }
        EscrowAction::Release => status == EscrowStatus::Delivered,
        EscrowAction::Resolve => status == EscrowStatus::Disputed,
    }
}

/// All actions available to the viewer described by `ctx` against an escrow
/// in `status`, in declaration order.
pub fn allowed_actions(status: EscrowStatus, ctx: &ActionContext) -> Vec<EscrowAction> {
    EscrowAction::all()
        .iter()
        .copied()
        .filter(|action| is_action_allowed(status, *action, ctx))
        .collect()
}

/// The status the backend is expected to report after `action` succeeds
/// against an escrow in `status`.
///
/// [`EscrowAction::UploadProof`] leaves the status unchanged;
/// [`EscrowAction::Resolve`] needs a decision, so use [`apply_resolution`].
///
/// # Errors
///
/// [`EscrowError::TerminalState`] if `status` is terminal;
/// [`EscrowError::InvalidTransition`] for any other illegal pair.
pub fn apply_action(status: EscrowStatus, action: EscrowAction) -> Result<EscrowStatus, EscrowError> {
    if status.is_terminal() {
        return Err(EscrowError::TerminalState { status });
    }
    let next = match (status, action) {
        (EscrowStatus::PendingPayment, EscrowAction::Fund) => EscrowStatus::Funded,
        (EscrowStatus::Funded, EscrowAction::Ship) => EscrowStatus::Shipped,
        (EscrowStatus::Shipped | EscrowStatus::Delivered, EscrowAction::UploadProof) => status,
        (EscrowStatus::Shipped | EscrowStatus::Delivered, EscrowAction::ConfirmReceipt) => {
            EscrowStatus::Delivered
        }
        (EscrowStatus::Shipped | EscrowStatus::Delivered, EscrowAction::OpenDispute) => {
            EscrowStatus::Disputed
        }
        (EscrowStatus::Delivered, EscrowAction::Release) => EscrowStatus::Released,
        (from, action) => return Err(EscrowError::InvalidTransition { from, action }),
    };
    Ok(next)
}

/// The terminal status an admin `decision` moves a disputed escrow into.
///
/// # Errors
///
/// [`EscrowError::NoOpenDispute`] unless `status` is `disputed`.
pub fn apply_resolution(
    status: EscrowStatus,
    decision: Resolution,
) -> Result<EscrowStatus, EscrowError> {
    if status != EscrowStatus::Disputed {
        return Err(EscrowError::NoOpenDispute { status });
    }
    Ok(decision.escrow_status())
}

//! # rekber-escrow
//!
//! The escrow lifecycle model for the rekber platform. This crate is the
//! single source of truth for the rules that elsewhere live scattered
//! through UI conditionals: which statuses exist, which transitions between
//! them are legal, and which actions a given viewer may take against an
//! escrow in a given status.
//!
//! ## Design Choice: Validated Enum over Typestate
//!
//! [`EscrowStatus`] is a runtime-validated enum rather than a typestate
//! chain. Escrow records arrive from the backend with their status decided
//! at runtime (the backend is authoritative; this crate gates and
//! validates, it does not drive state), and serialize directly via serde.
//! Illegal transitions surface as [`EscrowError::InvalidTransition`] rather
//! than being unrepresentable, because the interesting question here is
//! "is this observed/requested transition legal", asked of runtime data.
//!
//! ## Modules
//!
//! - [`status`]: the status enum and its transition table.
//! - [`escrow`]: the escrow record itself.
//! - [`dispute`]: dispute records, statuses, and admin resolutions.
//! - [`kyc`]: seller identity-verification state.
//! - [`gating`]: the status-gated action resolver and transition functions.

pub mod dispute;
pub mod error;
pub mod escrow;
pub mod gating;
pub mod kyc;
pub mod status;

pub use dispute::{Dispute, DisputeStatus, Resolution};
pub use error::EscrowError;
pub use escrow::Escrow;
pub use gating::{allowed_actions, apply_action, apply_resolution, is_action_allowed};
pub use gating::{ActionContext, EscrowAction};
pub use kyc::{KycProfile, KycRecord, KycStatus, KycSubmission, PendingKycSeller};
pub use status::EscrowStatus;

//! Escrow lifecycle error types.

use crate::gating::EscrowAction;
use crate::status::EscrowStatus;
use rekber_core::Role;

/// Errors from escrow lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum EscrowError {
    /// The requested action has no legal transition from the current status.
    #[error("action {action} is not valid from status {from}")]
    InvalidTransition {
        /// Status the escrow was in.
        from: EscrowStatus,
        /// Action that was attempted.
        action: EscrowAction,
    },

    /// The escrow is in a terminal status; no action can move it.
    #[error("escrow is in terminal status {status}; no further transitions")]
    TerminalState {
        /// The terminal status.
        status: EscrowStatus,
    },

    /// The action is structurally possible in this status but denied for
    /// this viewer (wrong role, or a precondition such as KYC is unmet).
    #[error("{role} may not {action} while status is {status}: {reason}")]
    ActionNotAllowed {
        /// The viewer's role.
        role: Role,
        /// Action that was attempted.
        action: EscrowAction,
        /// Status the escrow was in.
        status: EscrowStatus,
        /// Which gate failed.
        reason: String,
    },

    /// A dispute resolution was attempted while no dispute is open.
    #[error("cannot resolve: escrow status is {status}, not disputed")]
    NoOpenDispute {
        /// Status the escrow was in.
        status: EscrowStatus,
    },
}

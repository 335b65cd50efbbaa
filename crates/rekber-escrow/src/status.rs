//! # Escrow Status
//!
//! The lifecycle status of an escrow transaction.
//!
//! ## Transition Graph
//!
//! ```text
//! pending_payment ──fund──▶ funded ──ship──▶ shipped ──confirm──▶ delivered
//!                                               │                     │
//!                                               │ open_dispute        ├─release──▶ released
//!                                               ▼                     │
//!                                           disputed ◀──open_dispute──┘
//!                                               │
//!                                ┌──────────────┼──────────────┐
//!                                ▼              ▼              ▼
//!                         resolved_refund resolved_release resolved_split
//! ```
//!
//! The happy path is strictly monotonic; `disputed` branches off from
//! `shipped`/`delivered`, and the three resolution statuses are reachable
//! only from `disputed`. `released` and the `resolved_*` trio are terminal.

use serde::{Deserialize, Serialize};

/// The lifecycle status of an escrow, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscrowStatus {
    /// Created; awaiting buyer funding.
    PendingPayment,
    /// Buyer's payment has settled into the held account.
    Funded,
    /// Seller has shipped and submitted a shipping receipt.
    Shipped,
    /// Buyer has confirmed receipt of the goods.
    Delivered,
    /// Funds released to the seller. Terminal state.
    Released,
    /// A dispute is open; normal progression is suspended.
    Disputed,
    /// Dispute resolved in the buyer's favor; funds refunded. Terminal state.
    ResolvedRefund,
    /// Dispute resolved in the seller's favor; funds released. Terminal state.
    ResolvedRelease,
    /// Dispute resolved by splitting the settlement. Terminal state.
    ResolvedSplit,
}

impl EscrowStatus {
    /// The canonical wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingPayment => "pending_payment",
            Self::Funded => "funded",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Released => "released",
            Self::Disputed => "disputed",
            Self::ResolvedRefund => "resolved_refund",
            Self::ResolvedRelease => "resolved_release",
            Self::ResolvedSplit => "resolved_split",
        }
    }

    /// All statuses, in happy-path-then-dispute-branch order.
    pub fn all() -> &'static [EscrowStatus] {
        &[
            Self::PendingPayment,
            Self::Funded,
            Self::Shipped,
            Self::Delivered,
            Self::Released,
            Self::Disputed,
            Self::ResolvedRefund,
            Self::ResolvedRelease,
            Self::ResolvedSplit,
        ]
    }

    /// Whether this status is terminal (no further transitions allowed).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Released | Self::ResolvedRefund | Self::ResolvedRelease | Self::ResolvedSplit
        )
    }

    /// Whether this status is one of the three dispute resolutions.
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            Self::ResolvedRefund | Self::ResolvedRelease | Self::ResolvedSplit
        )
    }

    /// Position along the happy path (`pending_payment` = 0 through
    /// `released` = 4), or `None` for the dispute branch.
    pub fn happy_path_position(&self) -> Option<u8> {
        match self {
            Self::PendingPayment => Some(0),
            Self::Funded => Some(1),
            Self::Shipped => Some(2),
            Self::Delivered => Some(3),
            Self::Released => Some(4),
            _ => None,
        }
    }

    /// Valid target statuses from this status.
    ///
    /// This is the invariant the backend enforces and this client trusts;
    /// it is used to gate actions and to validate observed status changes,
    /// never to advance state locally.
    pub fn valid_transitions(&self) -> &'static [EscrowStatus] {
        match self {
            Self::PendingPayment => &[Self::Funded],
            Self::Funded => &[Self::Shipped],
            Self::Shipped => &[Self::Delivered, Self::Disputed],
            Self::Delivered => &[Self::Released, Self::Disputed],
            Self::Disputed => &[
                Self::ResolvedRefund,
                Self::ResolvedRelease,
                Self::ResolvedSplit,
            ],
            Self::Released
            | Self::ResolvedRefund
            | Self::ResolvedRelease
            | Self::ResolvedSplit => &[],
        }
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: EscrowStatus) -> bool {
        self.valid_transitions().contains(&next)
    }
}

impl std::fmt::Display for EscrowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EscrowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_payment" => Ok(Self::PendingPayment),
            "funded" => Ok(Self::Funded),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "released" => Ok(Self::Released),
            "disputed" => Ok(Self::Disputed),
            "resolved_refund" => Ok(Self::ResolvedRefund),
            "resolved_release" => Ok(Self::ResolvedRelease),
            "resolved_split" => Ok(Self::ResolvedSplit),
            other => Err(format!("unknown escrow status: {other}")),
        }
    }
}

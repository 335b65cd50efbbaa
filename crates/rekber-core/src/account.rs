//! # Accounts and Roles
//!
//! Every request to the platform is made *as* one of three roles, and every
//! escrow action is gated on the viewer's role. Role is assigned at
//! registration (buyer or seller); admin accounts are provisioned
//! server-side and cannot be self-registered.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::identity::UserId;

/// The viewer's role on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Funds escrows, confirms receipt, opens disputes.
    Buyer,
    /// Ships goods once the escrow is funded; gated on KYC verification.
    Seller,
    /// Releases delivered escrows and adjudicates disputes.
    Admin,
}

impl Role {
    /// The canonical wire name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Admin => "admin",
        }
    }

    /// Whether accounts with this role can be created through
    /// self-registration.
    pub fn self_registerable(&self) -> bool {
        matches!(self, Self::Buyer | Self::Seller)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            "admin" => Ok(Self::Admin),
            _ => Err(ValidationError::UnknownRole {
                value: s.to_string(),
            }),
        }
    }
}

/// A platform user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-issued account identifier.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Assigned role.
    pub role: Role,
}

//! # rekber-core
//!
//! Foundational types shared across the rekber escrow platform crates:
//!
//! - Identifier newtypes ([`EscrowId`], [`DisputeId`], [`UserId`]): each a
//!   distinct type, validated at construction and at deserialization.
//! - [`Rupiah`]: whole-rupiah monetary amounts (IDR carries no minor unit
//!   on this platform), with checked arithmetic only.
//! - [`PaymentMethod`]: the Indonesian payment rails an escrow can be
//!   funded through (QRIS, BI-FAST, bank transfer).
//! - [`Role`] and [`User`]: the three viewer roles that gate every action.
//!
//! This crate carries no escrow lifecycle logic and performs no I/O; the
//! status machine lives in `rekber-escrow`, the backend client in
//! `rekber-client`.

pub mod account;
pub mod error;
pub mod identity;
pub mod money;
pub mod payment;

pub use account::{Role, User};
pub use error::ValidationError;
pub use identity::{DisputeId, EscrowId, UserId};
pub use money::Rupiah;
pub use payment::PaymentMethod;

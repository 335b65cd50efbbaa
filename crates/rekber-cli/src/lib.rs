//! # rekber-cli
//!
//! Operator shell for the rekber escrow platform. Each module owns one
//! subcommand family: argument structs parsed by clap and an async
//! `run_*` handler that drives [`rekber_client::ApiClient`] and prints
//! either human-readable lines or raw JSON (`--json`).

pub mod admin;
pub mod auth;
pub mod context;
pub mod dispute;
pub mod escrow;
pub mod kyc;
pub mod output;

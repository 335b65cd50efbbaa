//! # rekber CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; every handler drives the
//! typed backend client and honors the global `--json` output flag.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rekber_cli::admin::{run_admin, AdminArgs};
use rekber_cli::auth::{
    run_login, run_logout, run_register, run_whoami, LoginArgs, LogoutArgs, RegisterArgs,
    WhoamiArgs,
};
use rekber_cli::context::{CliContext, DEFAULT_API_URL};
use rekber_cli::dispute::{run_dispute, DisputeArgs};
use rekber_cli::escrow::{run_escrow, EscrowArgs};
use rekber_cli::kyc::{run_kyc, KycArgs};

/// rekber — operator CLI for the rekber escrow platform.
///
/// Drives the backend API: authentication, escrow lifecycle operations
/// (fund, ship, confirm, dispute), KYC verification, and admin release.
#[derive(Parser, Debug)]
#[command(name = "rekber", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Backend API base URL.
    #[arg(long, global = true, env = "REKBER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Path to the session file (default: ~/.rekber/session.json).
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    /// Emit raw JSON instead of human-readable output.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in and persist the session.
    Login(LoginArgs),

    /// Register a buyer or seller account.
    Register(RegisterArgs),

    /// Drop the stored session.
    Logout(LogoutArgs),

    /// Show the stored session.
    Whoami(WhoamiArgs),

    /// Escrow operations (list, show, create, fund, ship, confirm, ...).
    Escrow(EscrowArgs),

    /// Dispute operations (evidence, resolve).
    Dispute(DisputeArgs),

    /// KYC operations (status, submit, pending, show, review).
    Kyc(KycArgs),

    /// Admin operations (escrows, release).
    Admin(AdminArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let ctx = match CliContext::new(&cli.api_url, cli.session.clone(), cli.json) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match &cli.command {
        Commands::Login(args) => run_login(args, &ctx).await,
        Commands::Register(args) => run_register(args, &ctx).await,
        Commands::Logout(args) => run_logout(args, &ctx).await,
        Commands::Whoami(args) => run_whoami(args, &ctx).await,
        Commands::Escrow(args) => run_escrow(args, &ctx).await,
        Commands::Dispute(args) => run_dispute(args, &ctx).await,
        Commands::Kyc(args) => run_kyc(args, &ctx).await,
        Commands::Admin(args) => run_admin(args, &ctx).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

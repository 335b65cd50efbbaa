//! `admin` subcommand family: the platform-wide escrow listing and funds
//! release.

use clap::{Args, Subcommand};

use rekber_core::EscrowId;

use crate::context::CliContext;
use crate::output::{escrow_line, print_json, print_status_change, status_change_json};

/// Arguments for `rekber admin`.
#[derive(Args, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommands,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List every escrow on the platform.
    Escrows,

    /// Release a delivered escrow's funds to the seller.
    Release {
        /// Escrow identifier.
        id: EscrowId,
    },
}

/// Dispatch an `admin` subcommand.
pub async fn run_admin(args: &AdminArgs, ctx: &CliContext) -> anyhow::Result<u8> {
    match &args.command {
        AdminCommands::Escrows => {
            let escrows = ctx.client.admin_list_escrows().await?;
            if ctx.json {
                print_json(&escrows)?;
            } else if escrows.is_empty() {
                println!("No escrows");
            } else {
                for escrow in &escrows {
                    println!("{}", escrow_line(escrow));
                }
            }
            Ok(0)
        }

        AdminCommands::Release { id } => {
            let escrow = ctx.client.admin_release(id).await?;
            if ctx.json {
                print_json(&status_change_json(&escrow))?;
            } else {
                print_status_change(&escrow);
            }
            Ok(0)
        }
    }
}

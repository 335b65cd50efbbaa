//! `dispute` subcommand family: evidence submission and admin resolution.

use clap::{Args, Subcommand};

use rekber_client::dispute::EvidenceSubmission;
use rekber_core::DisputeId;
use rekber_escrow::Resolution;

use crate::context::CliContext;
use crate::output::{dispute_line, print_json};

/// Arguments for `rekber dispute`.
#[derive(Args, Debug)]
pub struct DisputeArgs {
    #[command(subcommand)]
    pub command: DisputeCommands,
}

#[derive(Subcommand, Debug)]
pub enum DisputeCommands {
    /// Attach evidence to an open dispute.
    Evidence {
        /// Dispute identifier.
        id: DisputeId,
        /// Hosted URL of the evidence photo or video.
        #[arg(long)]
        file_url: String,
        /// What the evidence shows.
        #[arg(long)]
        note: Option<String>,
    },

    /// Issue the final decision on an open dispute (admin).
    Resolve {
        /// Dispute identifier.
        id: DisputeId,
        /// Decision: favor_buyer, favor_seller, or split.
        #[arg(long)]
        decision: Resolution,
        /// Mandatory resolution note (audit trail).
        #[arg(long)]
        note: String,
    },
}

/// Dispatch a `dispute` subcommand.
pub async fn run_dispute(args: &DisputeArgs, ctx: &CliContext) -> anyhow::Result<u8> {
    match &args.command {
        DisputeCommands::Evidence { id, file_url, note } => {
            let evidence = EvidenceSubmission {
                file_url: file_url.clone(),
                note: note.clone(),
            };
            let dispute = ctx.client.submit_evidence(id, &evidence).await?;
            if ctx.json {
                print_json(&dispute)?;
            } else {
                println!("Evidence attached to {}", dispute_line(&dispute));
            }
            Ok(0)
        }

        DisputeCommands::Resolve { id, decision, note } => {
            let dispute = ctx.client.resolve_dispute(id, *decision, note).await?;
            if ctx.json {
                print_json(&dispute)?;
            } else {
                println!(
                    "Resolved {} as {} (escrow moves to {})",
                    dispute.id,
                    decision,
                    decision.escrow_status()
                );
                if *decision == Resolution::Split {
                    let escrow = ctx.client.get_escrow(&dispute.escrow_id).await?;
                    let (buyer_share, seller_share) = escrow.amount.split_half();
                    println!("Split: {buyer_share} to buyer, {seller_share} to seller");
                }
            }
            Ok(0)
        }
    }
}

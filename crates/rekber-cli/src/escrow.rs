//! `escrow` subcommand family: listing, detail, and the buyer/seller
//! lifecycle operations. Every mutating handler re-fetches the escrow
//! afterwards and reports the backend's authoritative status.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use rekber_client::escrow::{
    CreateEscrowRequest, DisputeRequest, FundingInstruction, ProofUpload, ShipmentRequest,
};
use rekber_core::{EscrowId, PaymentMethod, Role, Rupiah, UserId};
use rekber_escrow::{allowed_actions, ActionContext};

use crate::context::CliContext;
use crate::output::{
    dispute_line, escrow_line, print_escrow, print_json, print_status_change, status_change_json,
};

/// Arguments for `rekber escrow`.
#[derive(Args, Debug)]
pub struct EscrowArgs {
    #[command(subcommand)]
    pub command: EscrowCommands,
}

#[derive(Subcommand, Debug)]
pub enum EscrowCommands {
    /// List the viewer's escrows.
    List,

    /// Show one escrow in detail.
    Show {
        /// Escrow identifier.
        id: EscrowId,
    },

    /// Preview which actions a viewer could take against an escrow.
    Actions {
        /// Escrow identifier.
        id: EscrowId,
        /// Viewer role to resolve actions for.
        #[arg(long)]
        role: Role,
        /// Treat a receipt proof as already uploaded.
        #[arg(long)]
        proof_uploaded: bool,
        /// Treat a dispute as already open.
        #[arg(long)]
        dispute_open: bool,
    },

    /// Open a new escrow against a seller.
    Create {
        /// The seller's user id.
        #[arg(long)]
        seller: UserId,
        /// Amount in whole rupiah.
        #[arg(long)]
        amount: i64,
        /// Receipt-confirmation deadline (RFC 3339).
        #[arg(long)]
        deadline: DateTime<Utc>,
    },

    /// Submit funding details for a pending escrow.
    Fund {
        /// Escrow identifier.
        id: EscrowId,
        /// Payment rail: QRIS, BIFAST, or BANK_TRANSFER.
        #[arg(long, default_value = "QRIS")]
        method: PaymentMethod,
        /// QR code URL (QRIS payments).
        #[arg(long)]
        qr_code_url: Option<String>,
    },

    /// Submit the seller's shipping receipt.
    Ship {
        /// Escrow identifier.
        id: EscrowId,
        /// Courier receipt number (e.g. JNE123456789).
        #[arg(long)]
        receipt: String,
    },

    /// Upload the buyer's receipt proof.
    Proof {
        /// Escrow identifier.
        id: EscrowId,
        /// Hosted URL of the proof photo or video.
        #[arg(long)]
        url: String,
        /// Optional description.
        #[arg(long)]
        note: Option<String>,
    },

    /// Confirm receipt of the goods.
    Confirm {
        /// Escrow identifier.
        id: EscrowId,
    },

    /// Open a dispute against an escrow.
    Dispute {
        /// Escrow identifier.
        id: EscrowId,
        /// Dispute reason (e.g. item_not_as_described).
        #[arg(long, default_value = "item_not_as_described")]
        reason: String,
        /// Free-text elaboration.
        #[arg(long)]
        note: Option<String>,
    },
}

/// Dispatch an `escrow` subcommand.
pub async fn run_escrow(args: &EscrowArgs, ctx: &CliContext) -> anyhow::Result<u8> {
    match &args.command {
        EscrowCommands::List => {
            let escrows = ctx.client.list_escrows().await?;
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

        EscrowCommands::Show { id } => {
            let escrow = ctx.client.get_escrow(id).await?;
            if ctx.json {
                print_json(&escrow)?;
            } else {
                print_escrow(&escrow);
            }
            Ok(0)
        }

        EscrowCommands::Actions {
            id,
            role,
            proof_uploaded,
            dispute_open,
        } => {
            let escrow = ctx.client.get_escrow(id).await?;
            let mut action_ctx = ActionContext::for_role(*role)
                .with_receipt_proof(*proof_uploaded)
                .with_open_dispute(*dispute_open);
            // The shipping gate depends on the viewer's KYC state.
            if *role == Role::Seller {
                let kyc = ctx.client.my_kyc_status().await?;
                action_ctx = action_ctx.with_kyc_verified(kyc.is_verified());
            }
            let actions = allowed_actions(escrow.status, &action_ctx);
            if ctx.json {
                print_json(&actions)?;
            } else if actions.is_empty() {
                println!("No actions available for {role} while {} is {}", id, escrow.status);
            } else {
                for action in actions {
                    println!("{action}");
                }
            }
            Ok(0)
        }

        EscrowCommands::Create {
            seller,
            amount,
            deadline,
        } => {
            let request = CreateEscrowRequest {
                seller_id: seller.clone(),
                amount: Rupiah::new(*amount)?,
                deadline_confirm: *deadline,
            };
            let escrow = ctx.client.create_escrow(&request).await?;
            if ctx.json {
                print_json(&escrow)?;
            } else {
                println!("Created {} ({})", escrow.id, escrow.status);
            }
            Ok(0)
        }

        EscrowCommands::Fund {
            id,
            method,
            qr_code_url,
        } => {
            let mut instruction = FundingInstruction::with_generated_reference(*method);
            if let Some(url) = qr_code_url {
                instruction = instruction.with_qr_code_url(url.as_str());
            }
            ctx.client.fund_escrow(id, &instruction).await?;
            report_refetched(ctx, id).await
        }

        EscrowCommands::Ship { id, receipt } => {
            let shipment = ShipmentRequest {
                shipping_receipt: receipt.clone(),
            };
            let tracking = ctx.client.ship_escrow(id, &shipment).await?;
            if !ctx.json {
                match &tracking.tracking_number {
                    Some(number) => println!("Shipment submitted, tracking {number}"),
                    None => println!("Shipment submitted"),
                }
            }
            report_refetched(ctx, id).await
        }

        EscrowCommands::Proof { id, url, note } => {
            let proof = ProofUpload {
                proof_url: url.clone(),
                note: note.clone(),
            };
            ctx.client.upload_receipt_proof(id, &proof).await?;
            report_refetched(ctx, id).await
        }

        EscrowCommands::Confirm { id } => {
            ctx.client.confirm_receipt(id).await?;
            report_refetched(ctx, id).await
        }

        EscrowCommands::Dispute { id, reason, note } => {
            let request = DisputeRequest {
                reason: reason.clone(),
                note: note.clone(),
            };
            let dispute = ctx.client.open_dispute(id, &request).await?;
            if ctx.json {
                print_json(&dispute)?;
            } else {
                println!("Opened {}", dispute_line(&dispute));
            }
            report_refetched(ctx, id).await
        }
    }
}

/// Re-fetch the escrow after a mutating call and report its authoritative
/// status.
async fn report_refetched(ctx: &CliContext, id: &EscrowId) -> anyhow::Result<u8> {
    let escrow = ctx.client.get_escrow(id).await?;
    if ctx.json {
        print_json(&status_change_json(&escrow))?;
    } else {
        print_status_change(&escrow);
    }
    Ok(0)
}

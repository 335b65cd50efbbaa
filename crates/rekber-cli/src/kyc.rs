//! `kyc` subcommand family: the seller's own verification flow and the
//! admin review queue.

use clap::{Args, Subcommand};

use rekber_client::kyc::KycPage;
use rekber_core::UserId;
use rekber_escrow::{KycStatus, KycSubmission};

use crate::context::CliContext;
use crate::output::print_json;

/// Arguments for `rekber kyc`.
#[derive(Args, Debug)]
pub struct KycArgs {
    #[command(subcommand)]
    pub command: KycCommands,
}

#[derive(Subcommand, Debug)]
pub enum KycCommands {
    /// Show the viewer's own verification state.
    Status,

    /// Submit identity documents for review.
    Submit {
        /// Legal name.
        #[arg(long)]
        full_name: String,
        /// National ID number (KTP or passport).
        #[arg(long)]
        id_number: String,
        /// URL of the ID document scan.
        #[arg(long)]
        document_url: String,
        /// URL of a selfie holding the ID.
        #[arg(long)]
        selfie_url: String,
    },

    /// List sellers awaiting review (admin).
    Pending {
        /// Rows per page.
        #[arg(long, default_value_t = 20)]
        limit: u32,
        /// Rows to skip.
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Show one seller's full submission (admin).
    Show {
        /// The seller's user id.
        user_id: UserId,
    },

    /// Verify or reject a submission (admin).
    Review {
        /// The seller's user id.
        user_id: UserId,
        /// Verdict: verified or rejected.
        #[arg(long)]
        verdict: Verdict,
    },
}

/// The two admissible review outcomes.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Verdict {
    /// Approve the submission.
    Verified,
    /// Reject the submission.
    Rejected,
}

impl Verdict {
    fn status(self) -> KycStatus {
        match self {
            Self::Verified => KycStatus::Verified,
            Self::Rejected => KycStatus::Rejected,
        }
    }
}

/// Dispatch a `kyc` subcommand.
pub async fn run_kyc(args: &KycArgs, ctx: &CliContext) -> anyhow::Result<u8> {
    match &args.command {
        KycCommands::Status => {
            let profile = ctx.client.my_kyc_status().await?;
            if ctx.json {
                print_json(&profile)?;
            } else {
                println!("Status  {}", profile.status);
                if let Some(level) = &profile.level {
                    println!("Level   {level}");
                }
                if let Some(at) = profile.submitted_at {
                    println!("Sent    {}", at.to_rfc3339());
                }
                if !profile.is_verified() {
                    println!("KYC verification is required before shipping.");
                }
            }
            Ok(0)
        }

        KycCommands::Submit {
            full_name,
            id_number,
            document_url,
            selfie_url,
        } => {
            let submission = KycSubmission {
                full_name: full_name.clone(),
                id_number: id_number.clone(),
                document_url: document_url.clone(),
                selfie_url: selfie_url.clone(),
            };
            let profile = ctx.client.submit_kyc(&submission).await?;
            if ctx.json {
                print_json(&profile)?;
            } else {
                println!("KYC submitted; status is {}", profile.status);
            }
            Ok(0)
        }

        KycCommands::Pending { limit, offset } => {
            let pending = ctx
                .client
                .pending_kyc(KycPage {
                    limit: *limit,
                    offset: *offset,
                })
                .await?;
            if ctx.json {
                print_json(&pending)?;
            } else if pending.is_empty() {
                println!("No pending sellers");
            } else {
                for row in &pending {
                    let email = row.email.as_deref().unwrap_or("-");
                    let submitted = row
                        .submitted_at
                        .map(|at| at.to_rfc3339())
                        .unwrap_or_else(|| "-".to_string());
                    println!("{}  {}  {}  {}", row.id, email, row.status, submitted);
                }
            }
            Ok(0)
        }

        KycCommands::Show { user_id } => {
            let record = ctx.client.user_kyc_details(user_id).await?;
            if ctx.json {
                print_json(&record)?;
            } else {
                println!("User      {user_id}");
                println!("Name      {}", record.full_name.as_deref().unwrap_or("-"));
                println!("ID no.    {}", record.id_number.as_deref().unwrap_or("-"));
                println!("Document  {}", record.document_url.as_deref().unwrap_or("-"));
                println!("Selfie    {}", record.selfie_url.as_deref().unwrap_or("-"));
                println!("Status    {}", record.status);
            }
            Ok(0)
        }

        KycCommands::Review { user_id, verdict } => {
            let profile = ctx.client.review_kyc(user_id, verdict.status()).await?;
            if ctx.json {
                print_json(&profile)?;
            } else {
                println!("KYC for {user_id} is now {}", profile.status);
            }
            Ok(0)
        }
    }
}

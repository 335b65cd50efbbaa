//! `login`, `register`, `logout`, and `whoami` handlers.

use clap::Args;

use rekber_core::Role;

use crate::context::CliContext;
use crate::output::print_json;

/// Arguments for `rekber login`.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,

    /// Account password.
    #[arg(long, env = "REKBER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for `rekber register`.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,

    /// Account password.
    #[arg(long, env = "REKBER_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Account role: buyer or seller.
    #[arg(long)]
    pub role: Role,
}

/// Arguments for `rekber logout`.
#[derive(Args, Debug)]
pub struct LogoutArgs {}

/// Arguments for `rekber whoami`.
#[derive(Args, Debug)]
pub struct WhoamiArgs {}

/// Log in and persist the session.
pub async fn run_login(args: &LoginArgs, ctx: &CliContext) -> anyhow::Result<u8> {
    let user = ctx.client.login(&args.email, &args.password).await?;
    if ctx.json {
        print_json(&user)?;
    } else {
        println!("Logged in as {} ({})", user.email, user.role);
    }
    Ok(0)
}

/// Register a new buyer or seller account and persist the session.
pub async fn run_register(args: &RegisterArgs, ctx: &CliContext) -> anyhow::Result<u8> {
    let user = ctx
        .client
        .register(&args.email, &args.password, args.role)
        .await?;
    if ctx.json {
        print_json(&user)?;
    } else {
        println!("Registered {} as {}", user.email, user.role);
    }
    Ok(0)
}

/// Drop the stored session.
pub async fn run_logout(_args: &LogoutArgs, ctx: &CliContext) -> anyhow::Result<u8> {
    ctx.client.logout();
    if !ctx.json {
        println!("Logged out");
    }
    Ok(0)
}

/// Show the stored session, if any.
pub async fn run_whoami(_args: &WhoamiArgs, ctx: &CliContext) -> anyhow::Result<u8> {
    match ctx.client.session().user_id() {
        Some(user_id) => {
            if ctx.json {
                print_json(&serde_json::json!({ "user_id": user_id }))?;
            } else {
                println!("Logged in as user {user_id}");
            }
            Ok(0)
        }
        None => {
            if ctx.json {
                print_json(&serde_json::json!({ "user_id": null }))?;
            } else {
                println!("Not logged in");
            }
            Ok(1)
        }
    }
}

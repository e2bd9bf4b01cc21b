//! Blueprint management command-line client.
//!
//! This binary is the composition root: it resolves the startup
//! configuration (store backend, read-time filter), builds the service, and
//! executes one subcommand against it. Blueprint data goes to stdout as
//! JSON; logs go to stderr.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use crate::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::run(cli).await
}

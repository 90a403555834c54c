//! Entry point: parse CLI, set up logging, run one roster sync.

use anyhow::Context;
use clap::Parser;
use sleeper_roster::{cli::RosterSync, commands::sync_players::handle_sync_players};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the summary (or JSON on --dry-run)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let app = RosterSync::parse();
    let output = app.output.clone();
    let url = app.url.clone();

    handle_sync_players(app.into_params())
        .await
        .with_context(|| format!("roster sync from {} to {} failed", url, output.display()))?;

    Ok(())
}

//! Fetch the Sleeper player dump, filter it, and write the roster file.
//!
//! The main entry point is [`handle_sync_players`]. A run either writes a
//! complete file or fails before touching the destination: every fetch or
//! decode error is raised before anything is written.

use std::{fmt, path::PathBuf, time::Duration};

use chrono::{DateTime, Local};
use tracing::info;

use crate::{
    core::{
        filters::{filter_roster_with_stats, FilterConfig, FilterStats},
        output::{render_roster, write_roster},
    },
    sleeper::http::{build_client, fetch_players},
    Result,
};

/// Options for one sync run.
#[derive(Debug, Clone)]
pub struct SyncParams {
    pub url: String,
    pub output: PathBuf,
    pub timeout: Duration,
    pub config: FilterConfig,
    /// Print per-rule drop counts after the summary.
    pub verbose: bool,
    /// Print the JSON to stdout instead of writing the file.
    pub dry_run: bool,
}

/// What a run did, printed as the one-line operator summary.
#[derive(Debug, Clone)]
pub struct SyncSummary {
    pub total: usize,
    pub filtered: usize,
    pub destination: String,
    pub finished_at: DateTime<Local>,
    pub stats: FilterStats,
}

impl fmt::Display for SyncSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total players: {} | Filtered: {} | Saved to {} @ {}",
            self.total,
            self.filtered,
            self.destination,
            self.finished_at.format("%Y-%m-%dT%H:%M:%S")
        )
    }
}

/// Multi-line breakdown of why records were dropped.
pub fn format_stats(stats: &FilterStats) -> String {
    let mut lines = vec![
        format!("  inactive:           {}", stats.inactive),
        format!("  wrong sport:        {}", stats.wrong_sport),
        format!("  invalid position:   {}", stats.invalid_position),
        format!("  excluded status:    {}", stats.excluded_status),
        format!("  missing team:       {}", stats.missing_team),
    ];
    if stats.defense_replaced > 0 || stats.synthesized > 0 {
        lines.push(format!("  feed DEF replaced:  {}", stats.defense_replaced));
        lines.push(format!("  DEF synthesized:    {}", stats.synthesized));
    }
    format!("Dropped {} records:\n{}", stats.rejected(), lines.join("\n"))
}

/// Run one fetch → filter → write cycle.
pub async fn handle_sync_players(params: SyncParams) -> Result<SyncSummary> {
    let client = build_client(params.timeout)?;
    let raw = fetch_players(&client, &params.url).await?;

    let (roster, stats) = filter_roster_with_stats(&raw, &params.config);

    let destination = if params.dry_run {
        println!("{}", render_roster(&roster)?);
        "<stdout>".to_string()
    } else {
        write_roster(&params.output, &roster)?;
        params.output.display().to_string()
    };

    let summary = SyncSummary {
        total: raw.len(),
        filtered: roster.len(),
        destination,
        finished_at: Local::now(),
        stats,
    };

    info!(
        total = summary.total,
        filtered = summary.filtered,
        destination = %summary.destination,
        "roster sync complete"
    );
    println!("{}", summary);

    if params.verbose {
        println!("{}", format_stats(&summary.stats));
    }

    Ok(summary)
}

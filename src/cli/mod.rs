//! CLI argument definitions and parsing.
//!
//! Every flag is optional; a bare invocation writes the default roster file.

pub mod types;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser};
use types::{DefenseMode, FieldSet, Placeholder, StatusMatch};

use crate::{
    commands::sync_players::SyncParams,
    core::{filters::FilterConfig, output::DEFAULT_OUTPUT_PATH},
    sleeper::http::{DEFAULT_TIMEOUT_SECS, SLEEPER_PLAYERS_URL},
};

/// Options that shape which players are kept and how records look.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// How team defenses reach the output.
    #[clap(long, value_enum, default_value_t = DefenseMode::default())]
    pub defense_mode: DefenseMode,

    /// Keep players with no team.
    #[clap(long)]
    pub no_team_required: bool,

    /// How `status` is compared against the excluded list.
    #[clap(long, value_enum, default_value_t = StatusMatch::default())]
    pub status_match: StatusMatch,

    /// Fields written per player. Synthesized defenses always use `extended`.
    #[clap(long, value_enum, default_value_t = FieldSet::default())]
    pub fields: FieldSet,

    /// Value written for fields the feed lacks.
    #[clap(long, value_enum, default_value_t = Placeholder::default())]
    pub placeholder: Placeholder,
}

impl FilterArgs {
    pub fn to_config(&self) -> FilterConfig {
        FilterConfig::default()
            .defense_mode(self.defense_mode)
            .team_required(!self.no_team_required)
            .status_match(self.status_match)
            .fields(self.fields)
            .placeholder(self.placeholder)
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "sleeper-roster",
    about = "Fetch Sleeper NFL players and write a filtered roster file"
)]
pub struct RosterSync {
    #[clap(flatten)]
    pub filters: FilterArgs,

    /// Players endpoint to fetch.
    #[clap(long, default_value = SLEEPER_PLAYERS_URL)]
    pub url: String,

    /// Destination JSON file (parent directories are created).
    #[clap(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Give up on the fetch after this many seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print per-rule drop counts.
    #[clap(long, short)]
    pub verbose: bool,

    /// Print the roster JSON instead of writing the file.
    #[clap(long)]
    pub dry_run: bool,
}

impl RosterSync {
    pub fn into_params(self) -> SyncParams {
        SyncParams {
            config: self.filters.to_config(),
            url: self.url,
            output: self.output,
            timeout: Duration::from_secs(self.timeout_secs),
            verbose: self.verbose,
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_uses_reference_defaults() {
        let cli = RosterSync::try_parse_from(["sleeper-roster"]).unwrap();
        let params = cli.into_params();

        assert_eq!(params.url, SLEEPER_PLAYERS_URL);
        assert_eq!(params.output, PathBuf::from("docs/players_2025.json"));
        assert_eq!(params.timeout, Duration::from_secs(60));
        assert_eq!(params.config, FilterConfig::default());
        assert!(!params.verbose);
        assert!(!params.dry_run);
    }

    #[test]
    fn test_all_flags() {
        let cli = RosterSync::try_parse_from([
            "sleeper-roster",
            "--defense-mode",
            "synthesized",
            "--no-team-required",
            "--status-match",
            "exact",
            "--fields",
            "extended",
            "--placeholder",
            "empty",
            "--url",
            "http://localhost:9999/players",
            "-o",
            "out/roster.json",
            "--timeout-secs",
            "5",
            "-v",
            "--dry-run",
        ])
        .unwrap();
        let params = cli.into_params();

        assert_eq!(
            params.config,
            FilterConfig {
                defense_mode: DefenseMode::Synthesized,
                team_required: false,
                status_match: StatusMatch::Exact,
                fields: FieldSet::Extended,
                placeholder: Placeholder::Empty,
            }
        );
        assert_eq!(params.url, "http://localhost:9999/players");
        assert_eq!(params.output, PathBuf::from("out/roster.json"));
        assert_eq!(params.timeout, Duration::from_secs(5));
        assert!(params.verbose);
        assert!(params.dry_run);
    }

    #[test]
    fn test_rejects_unknown_defense_mode() {
        let result = RosterSync::try_parse_from(["sleeper-roster", "--defense-mode", "merge"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        RosterSync::command().debug_assert();
    }
}

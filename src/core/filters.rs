//! The roster filter: decides which Sleeper records survive and reshapes them.
//!
//! Each raw record is checked against these rules, in order, stopping at the
//! first failure:
//!
//! 1. `active` must be truthy
//! 2. `sport` must be exactly `"nfl"`
//! 3. `position` must be one of QB, RB, WR, TE, K, DEF (exact match)
//! 4. `status` must not be an excluded status (case-insensitive by default)
//! 5. `team` must be non-empty, when [`FilterConfig::team_required`] is set
//!
//! With [`DefenseMode::Synthesized`], DEF records from the feed are dropped
//! and one entry per franchise in [`TEAMS`] is generated instead. Generated
//! entries always carry the extended fields, so that mode writes the extended
//! field set for every record.
//!
//! The filter does no I/O and never fails: missing fields become placeholders.

use tracing::debug;

use crate::cli::types::{DefenseMode, FieldSet, Placeholder, Position, StatusMatch};
use crate::core::teams::{Team, TEAMS};
use crate::sleeper::types::{Field, FilteredPlayer, FilteredRoster, RawPlayer};


/// The only sport the roster covers.
pub const SPORT: &str = "nfl";

/// Statuses that keep a player off the roster, in Sleeper's lower-case spelling.
pub const EXCLUDED_STATUSES: [&str; 3] = [
    "injured_reserve",
    "non_football_injury",
    "physically_unable_to_perform",
];

/// Knobs that select between the roster variants.
///
/// [`FilterConfig::default`] produces the standard roster file: DEF records
/// passed through, team required, case-insensitive status match, core fields,
/// `null` for missing values.
///
/// # Examples
///
/// ```rust
/// use sleeper_roster::core::filters::FilterConfig;
/// use sleeper_roster::cli::types::{DefenseMode, FieldSet};
///
/// let config = FilterConfig::default()
///     .defense_mode(DefenseMode::Synthesized)
///     .fields(FieldSet::Extended);
/// assert!(config.team_required);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub defense_mode: DefenseMode,
    pub team_required: bool,
    pub status_match: StatusMatch,
    pub fields: FieldSet,
    pub placeholder: Placeholder,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            defense_mode: DefenseMode::PassThrough,
            team_required: true,
            status_match: StatusMatch::CaseInsensitive,
            fields: FieldSet::Core,
            placeholder: Placeholder::Null,
        }
    }
}

impl FilterConfig {
    pub fn defense_mode(mut self, mode: DefenseMode) -> Self {
        self.defense_mode = mode;
        self
    }
    pub fn team_required(mut self, on: bool) -> Self {
        self.team_required = on;
        self
    }
    pub fn status_match(mut self, m: StatusMatch) -> Self {
        self.status_match = m;
        self
    }
    pub fn fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }
    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Field set actually written: synthesized defenses force [`FieldSet::Extended`].
    pub fn effective_fields(&self) -> FieldSet {
        match self.defense_mode {
            DefenseMode::Synthesized => FieldSet::Extended,
            DefenseMode::PassThrough => self.fields,
        }
    }
}

/// Why a raw record was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Inactive,
    WrongSport,
    InvalidPosition,
    /// DEF record dropped because defenses are synthesized.
    DefenseReplaced,
    ExcludedStatus,
    MissingTeam,
}

/// Counts gathered during one filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub input: usize,
    pub kept: usize,
    pub inactive: usize,
    pub wrong_sport: usize,
    pub invalid_position: usize,
    pub defense_replaced: usize,
    pub excluded_status: usize,
    pub missing_team: usize,
    pub synthesized: usize,
}

impl FilterStats {
    fn record(&mut self, rejection: Rejection) {
        let counter = match rejection {
            Rejection::Inactive => &mut self.inactive,
            Rejection::WrongSport => &mut self.wrong_sport,
            Rejection::InvalidPosition => &mut self.invalid_position,
            Rejection::DefenseReplaced => &mut self.defense_replaced,
            Rejection::ExcludedStatus => &mut self.excluded_status,
            Rejection::MissingTeam => &mut self.missing_team,
        };
        *counter += 1;
    }

    /// Total raw records dropped by any rule.
    pub fn rejected(&self) -> usize {
        self.inactive
            + self.wrong_sport
            + self.invalid_position
            + self.defense_replaced
            + self.excluded_status
            + self.missing_team
    }
}

/// True when `status` is on the excluded list. Absent status never is.
pub fn is_excluded_status(status: Option<&str>, status_match: StatusMatch) -> bool {
    let status = status.unwrap_or("");
    match status_match {
        StatusMatch::CaseInsensitive => {
            let lowered = status.to_lowercase();
            EXCLUDED_STATUSES.contains(&lowered.as_str())
        }
        StatusMatch::Exact => EXCLUDED_STATUSES.contains(&status),
    }
}

/// Run the rules against one record, returning its parsed position on success.
pub fn check_player(
    player: &RawPlayer,
    config: &FilterConfig,
) -> std::result::Result<Position, Rejection> {
    if !player.active {
        return Err(Rejection::Inactive);
    }
    if player.sport.as_deref() != Some(SPORT) {
        return Err(Rejection::WrongSport);
    }
    let position = player
        .position
        .as_deref()
        .and_then(|p| p.parse::<Position>().ok())
        .ok_or(Rejection::InvalidPosition)?;
    if position.is_team_defense() && config.defense_mode == DefenseMode::Synthesized {
        return Err(Rejection::DefenseReplaced);
    }
    if is_excluded_status(player.status.as_deref(), config.status_match) {
        return Err(Rejection::ExcludedStatus);
    }
    if config.team_required && player.team.as_deref().map_or(true, str::is_empty) {
        return Err(Rejection::MissingTeam);
    }
    Ok(position)
}

/// Project a surviving record onto the output schema.
pub fn reshape_player(
    player_id: &str,
    player: &RawPlayer,
    position: Position,
    config: &FilterConfig,
) -> FilteredPlayer {
    let p = config.placeholder;
    let extended = config.effective_fields().is_extended();

    FilteredPlayer {
        depth_chart_order: extended.then(|| Field::from_option(player.depth_chart_order.clone(), p)),
        first_name: extended.then(|| Field::from_option(player.first_name.clone(), p)),
        full_name: Field::from_option(player.full_name.clone(), p),
        last_name: extended.then(|| Field::from_option(player.last_name.clone(), p)),
        player_id: player_id.to_string(),
        position,
        status: Field::from_option(player.status.clone(), p),
        team: Field::from_option(player.team.clone(), p),
        years_exp: Field::from_option(player.years_exp.clone(), p),
    }
}

/// Build the team-defense entry for one franchise.
///
/// Every field is written regardless of the configured field set. Fields that
/// make no sense for a whole unit are always `""`, whatever the placeholder.
pub fn synthesize_defense(team: &Team) -> FilteredPlayer {
    let (first, last) = team.name_parts();

    FilteredPlayer {
        depth_chart_order: Some(Field::Empty),
        first_name: Some(Field::Value(first.to_string())),
        full_name: Field::Value(team.name.to_string()),
        last_name: Some(Field::Value(last.to_string())),
        player_id: team.abbr.to_string(),
        position: Position::DEF,
        status: Field::Empty,
        team: Field::Value(team.abbr.to_string()),
        years_exp: Field::Empty,
    }
}

/// Filter and reshape a raw feed.
///
/// Accepts any `(player_id, record)` iterator; the result is keyed and
/// ordered by id regardless of input order.
pub fn filter_roster<'a, I, K>(raw: I, config: &FilterConfig) -> FilteredRoster
where
    I: IntoIterator<Item = (K, &'a RawPlayer)>,
    K: AsRef<str>,
{
    filter_roster_with_stats(raw, config).0
}

/// Like [`filter_roster`], also returning per-rule counts.
pub fn filter_roster_with_stats<'a, I, K>(
    raw: I,
    config: &FilterConfig,
) -> (FilteredRoster, FilterStats)
where
    I: IntoIterator<Item = (K, &'a RawPlayer)>,
    K: AsRef<str>,
{
    let mut roster = FilteredRoster::new();
    let mut stats = FilterStats::default();

    for (pid, player) in raw {
        let pid = pid.as_ref();
        stats.input += 1;
        match check_player(player, config) {
            Ok(position) => {
                roster.insert(pid.to_string(), reshape_player(pid, player, position, config));
            }
            Err(rejection) => {
                debug!(player_id = pid, ?rejection, "player dropped");
                stats.record(rejection);
            }
        }
    }

    if config.defense_mode == DefenseMode::Synthesized {
        for team in TEAMS.iter() {
            roster.insert(team.abbr.to_string(), synthesize_defense(team));
            stats.synthesized += 1;
        }
    }

    stats.kept = roster.len();
    debug!(?stats, "roster filtered");

    (roster, stats)
}

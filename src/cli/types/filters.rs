//! Option types that shape how the roster filter behaves.

use std::fmt;

/// How team-defense (`DEF`) entries reach the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DefenseMode {
    /// Keep DEF records from the feed when they pass the normal rules.
    #[default]
    PassThrough,
    /// Drop DEF records from the feed and emit one entry per NFL franchise.
    Synthesized,
}

impl fmt::Display for DefenseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DefenseMode::PassThrough => "pass-through",
            DefenseMode::Synthesized => "synthesized",
        };
        write!(f, "{}", s)
    }
}

/// How `status` is compared against the excluded-status list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusMatch {
    /// `Injured_Reserve` and `injured_reserve` are the same status
    #[default]
    CaseInsensitive,
    /// Only the exact lower-case spelling is excluded
    Exact,
}

impl fmt::Display for StatusMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusMatch::CaseInsensitive => "case-insensitive",
            StatusMatch::Exact => "exact",
        };
        write!(f, "{}", s)
    }
}

/// Which fields each output record carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FieldSet {
    /// player_id, full_name, status, years_exp, team, position
    #[default]
    Core,
    /// Core plus first_name, last_name, depth_chart_order
    Extended,
}

impl FieldSet {
    pub fn is_extended(&self) -> bool {
        matches!(self, FieldSet::Extended)
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldSet::Core => "core",
            FieldSet::Extended => "extended",
        };
        write!(f, "{}", s)
    }
}

/// What a selected field holds when the raw record lacks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Placeholder {
    /// JSON `null`
    #[default]
    Null,
    /// Empty string `""`
    Empty,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Placeholder::Null => "null",
            Placeholder::Empty => "empty",
        };
        write!(f, "{}", s)
    }
}

//! Core roster logic
//!
//! - `filters`: the roster filter and its configuration
//! - `output`: deterministic JSON rendering and atomic writes
//! - `teams`: the static NFL franchise table

pub mod filters;
pub mod output;
pub mod teams;

pub use filters::{filter_roster, filter_roster_with_stats, FilterConfig, FilterStats};
pub use output::{render_roster, write_roster, DEFAULT_OUTPUT_PATH};
pub use teams::{Team, TEAMS};

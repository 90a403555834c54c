//! Sleeper NFL Roster Library
//!
//! Pulls the full Sleeper NFL player dump, keeps the fantasy-relevant players
//! and writes a slim, deterministic JSON roster for downstream tools.
//!
//! ## Features
//!
//! - **Roster Filter**: active NFL players at QB/RB/WR/TE/K/DEF, minus IR, NFI and PUP
//! - **Configurable Variants**: defense synthesis, team requirement, field set, placeholders
//! - **Stable Output**: sorted keys and fixed indentation for clean diffs
//! - **Atomic Writes**: the roster file is never left half-written
//!
//! ## Quick Start
//!
//! ```rust
//! use sleeper_roster::core::filters::{filter_roster, FilterConfig};
//! use sleeper_roster::sleeper::types::decode_roster;
//! use serde_json::json;
//!
//! let raw = decode_roster(json!({
//!     "4046": {
//!         "active": true, "sport": "nfl", "position": "QB",
//!         "status": "Active", "team": "KC",
//!         "full_name": "Patrick Mahomes", "years_exp": 8
//!     }
//! })).unwrap();
//!
//! let roster = filter_roster(&raw, &FilterConfig::default());
//! assert_eq!(roster["4046"].player_id, "4046");
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{DefenseMode, FieldSet, Placeholder, Position, StatusMatch};
pub use error::{Result, RosterError};
pub use sleeper::types::{FilteredPlayer, FilteredRoster, RawPlayer, RawRoster};

//! Command implementations for the roster sync CLI

pub mod sync_players;

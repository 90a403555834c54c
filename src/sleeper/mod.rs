//! Sleeper API client and record types.

pub mod http;
pub mod types;

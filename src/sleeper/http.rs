//! HTTP access to the Sleeper players endpoint.

use std::time::Duration;

use reqwest::{header::ACCEPT, Client};
use serde_json::Value;
use tracing::debug;

use super::types::{decode_roster, RawRoster};
use crate::error::{Result, RosterError};


/// Full NFL player dump. Roughly 5 MB; Sleeper asks that it be pulled at most once a day.
pub const SLEEPER_PLAYERS_URL: &str = "https://api.sleeper.app/v1/players/nfl";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const USER_AGENT: &str = concat!("sleeper-roster/", env!("CARGO_PKG_VERSION"));

/// Build the client used for the single fetch of a run.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Fetch and decode the raw player map.
///
/// Non-2xx responses, malformed JSON and a non-object body are all errors;
/// nothing is retried.
pub async fn fetch_players(client: &Client, url: &str) -> Result<RawRoster> {
    debug!(url, "fetching players");

    let res = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(RosterError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = res.bytes().await?;
    debug!(bytes = bytes.len(), "players response received");

    let body: Value = serde_json::from_slice(&bytes)?;
    decode_roster(body)
}

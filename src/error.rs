//! Error types for the Sleeper roster sync

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Players endpoint {url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object keyed by player id, found {found}")]
    UnexpectedShape { found: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },
}

impl From<tempfile::PersistError> for RosterError {
    fn from(err: tempfile::PersistError) -> Self {
        RosterError::Io(err.error)
    }
}

use thiserror::Error;

use super::models::TrackerId;

/// Errors that can occur during tracker operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("tracker not found: {0}")]
    TrackerNotFound(TrackerId),
    #[error("category not found: {0}")]
    CategoryNotFound(String),
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `SubmissionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("{0} endpoint is not configured")]
    NotConfigured(&'static str),
    #[error("submission failed: {0}")]
    Transport(String),
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

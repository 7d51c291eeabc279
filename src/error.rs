//! Error and result types shared across the crate.
//!
//! Every failure to obtain records from upstream is a [`FetchError`]. Those
//! are logged and swallowed by the orchestrator; they never abort the UI.
//! Everything else (terminal setup, runtime construction, config I/O) is
//! application glue and flows through [`Result`].

use thiserror::Error;

/// Application-level result used by `main` and the event loop.
pub type Result<T> = anyhow::Result<T>;

/// A failed request to the random-user API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Pages are numbered from 1.
    #[error("invalid page number {0}; pages start at 1")]
    InvalidPage(u32),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The worker went away before answering.
    #[error("fetch worker unavailable")]
    WorkerGone,
}

impl FetchError {
    /// Short tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidPage(_) => "invalid_page",
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
            FetchError::WorkerGone => "worker_gone",
        }
    }
}

//! Bootstrap error types.

use thiserror::Error;

/// Errors that can occur while fetching the initial contact
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Request failed, returned a non-success status, or had an unreadable body
    #[error("Profile request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsed but held no profile
    #[error("Profile response contained no results")]
    EmptyResults,

    /// Task was cancelled before it finished
    #[error("Bootstrap was cancelled")]
    Cancelled,

    /// Task panicked
    #[error("Bootstrap task panicked: {0}")]
    Panicked(String),

    /// Bootstrap is switched off in configuration
    #[error("Bootstrap is disabled")]
    Disabled,
}

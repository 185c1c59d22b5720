//! Error types for the bad-seeds crates

use thiserror::Error;

/// Core error type for training-run operations
#[derive(Error, Debug)]
pub enum BadSeedsError {
    /// Environment-related errors
    #[error("Environment error: {0}")]
    Environment(String),

    /// Agent-related errors
    #[error("Agent error: {0}")]
    Agent(String),

    /// Invalid action
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Unknown environment version identifier. This is a configuration
    /// mistake and fails the run before any training starts.
    #[error("Unsupported environment version: {0}")]
    UnsupportedVersion(u32),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for training-run operations
pub type Result<T> = std::result::Result<T, BadSeedsError>;

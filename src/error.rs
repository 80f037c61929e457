//! Error types
//!
//! Every fallible operation in the crate returns [`RakeError`]. Scoring itself
//! cannot fail once candidates exist, so the variants cover inputs and
//! configuration only.

use thiserror::Error;

use crate::config::errors::ConfigError;

/// Errors raised by stopword loading, input checks and configuration.
#[derive(Debug, Error)]
pub enum RakeError {
    /// The stopword source name is not one of the bundled lists.
    #[error("stopword source `{0}` not found, expected one of: smart, fox")]
    InvalidSource(String),

    /// The input cannot be treated as text.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input exceeds a configured runtime limit.
    #[error("input too large: {actual} {unit} exceeds limit of {limit}")]
    InputTooLarge {
        limit: usize,
        actual: usize,
        unit: &'static str,
    },

    /// The configuration failed validation.
    #[error("invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ConfigError>),

    /// The configuration JSON could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RakeError>;

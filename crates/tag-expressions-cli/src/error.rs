//! Error types for the `tag-expr` command.

use thiserror::Error;

/// Failures raised before any expression is processed.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

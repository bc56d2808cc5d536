//! Error types for the CLI

use keycalc::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// The expression did not evaluate
    #[error("{0}")]
    Evaluation(#[from] CalcError),

    /// A button name matched nothing on the keypad
    #[error("Unknown button: {name}")]
    UnknownButton {
        /// The name as typed
        name: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Create an unknown button error
    #[must_use]
    pub fn unknown_button(name: impl Into<String>) -> Self {
        Self::UnknownButton { name: name.into() }
    }
}

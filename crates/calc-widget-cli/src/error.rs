//! Error types for the CLI

use calc_widget::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
///
/// Every message is complete as printed, including the `Error:` prefix.
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculator error, already phrased for the user
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// An operand that is not a number
    #[error("Error: Please enter valid numbers")]
    InvalidNumber {
        /// The rejected text
        input: String,
    },

    /// An operator outside `+ - * /`
    #[error("Error: Invalid operation")]
    InvalidOperation {
        /// The rejected text
        input: String,
    },

    /// Invalid argument
    #[error("Error: Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Output serialization failed
    #[error("Error: Serialization failed: {message}")]
    Serialization {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("Error: I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid number error
    #[must_use]
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    /// Create an invalid operation error
    #[must_use]
    pub fn invalid_operation(input: impl Into<String>) -> Self {
        Self::InvalidOperation {
            input: input.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization {
            message: message.to_string(),
        }
    }
}

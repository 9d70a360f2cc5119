//! Calculator engine core
//!
//! Holds accumulated keypad input and applies one pending binary operation
//! on demand. Nothing in here knows about rendering or time.

mod engine;
pub mod format;
mod operations;
mod state;

pub use engine::{CalculatorEngine, StatusUpdate, Update};
pub use operations::Operation;
pub use state::{CalculatorState, PendingOperation};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Recoverable calculator errors
///
/// Both variants are non-fatal: the engine resets itself and the UI layer
/// shows the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a second operand of exactly zero
    #[error("Error: Division by zero")]
    DivisionByZero,
    /// An operand or keypad character that cannot be interpreted
    #[error("Error: Invalid input")]
    InvalidInput(String),
}

/// Error classification, for UI layers that style errors by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// See [`CalcError::DivisionByZero`]
    DivisionByZero,
    /// See [`CalcError::InvalidInput`]
    InvalidInput,
}

impl CalcError {
    /// Creates an invalid input error with detail
    #[must_use]
    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput(detail.into())
    }

    /// Returns the error kind
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// Detail text for logs; empty for division by zero
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::DivisionByZero => "",
            Self::InvalidInput(detail) => detail,
        }
    }
}

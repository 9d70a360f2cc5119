//! Accumulated keypad state

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// Operand captured when an operator was selected, with that operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// First operand, as text
    pub operand: String,
    /// Operator awaiting its second operand
    pub operator: Operation,
}

/// Calculator state owned by a single UI layer
///
/// The previous value and pending operator live together in
/// [`PendingOperation`], so one is set exactly when the other is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current_input: String,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) awaiting_new_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Input shown after initialization and every reset
    pub const INITIAL_INPUT: &'static str = "0";

    /// Creates the initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_input: Self::INITIAL_INPUT.to_string(),
            pending: None,
            awaiting_new_operand: false,
        }
    }

    /// Text typed since the last operator or reset
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// First operand of the pending operation
    #[must_use]
    pub fn previous_value(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    /// Operator awaiting its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// True when the next digit starts a fresh number
    #[must_use]
    pub const fn awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// True when this is the initial state
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }

    /// Restores the initial state in place
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

//! Calculator engine: keypad actions applied to [`CalculatorState`]

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::format::{format_number, parse_operand, round_result};
use crate::core::{CalcError, CalcResult, CalculatorState, Operation, PendingOperation};

/// What the UI layer should do with its status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusUpdate {
    /// Leave the current message alone
    Unchanged,
    /// Remove any result or error message
    Cleared,
    /// Show a success message
    Success(String),
}

/// Outcome of a successful engine action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Text for the display field
    pub display: String,
    /// Status line change
    pub status: StatusUpdate,
}

impl Update {
    /// Success message, if this update carries one
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            StatusUpdate::Success(msg) => Some(msg),
            StatusUpdate::Unchanged | StatusUpdate::Cleared => None,
        }
    }
}

/// Input-accumulating calculator with a single pending operation
///
/// Operators chain left to right: `3 + 4 * 2` evaluates `3 + 4` when `*` is
/// pressed and then multiplies the result by 2. There is no precedence.
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    /// Creates an engine in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text for the display field
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.current_input
    }

    /// Appends a digit or the decimal point to the current operand
    ///
    /// A second decimal point in the same operand is ignored. Any other
    /// character than `0`-`9` and `.` is rejected without touching state.
    pub fn append_digit(&mut self, d: char) -> CalcResult<Update> {
        if !(d.is_ascii_digit() || d == '.') {
            return Err(CalcError::invalid_input(format!(
                "'{d}' is not a digit or decimal point"
            )));
        }

        let state = &mut self.state;
        if state.awaiting_new_operand {
            state.current_input = if d == '.' {
                "0.".to_string()
            } else {
                d.to_string()
            };
            state.awaiting_new_operand = false;
        } else if state.current_input == CalculatorState::INITIAL_INPUT && d != '.' {
            state.current_input = d.to_string();
        } else if d == '.' && state.current_input.contains('.') {
            debug!(input = %state.current_input, "duplicate decimal point ignored");
        } else {
            state.current_input.push(d);
        }

        debug!(digit = %d, input = %self.state.current_input, "digit appended");
        Ok(self.update(StatusUpdate::Cleared))
    }

    /// Selects the operator to apply to the next operand
    ///
    /// If an operation is already pending and its second operand has been
    /// typed, that operation is evaluated first and its result becomes the
    /// first operand of `op`. When that evaluation fails the error is
    /// returned, the engine is reset and `op` is dropped.
    pub fn select_operator(&mut self, op: Operation) -> CalcResult<Update> {
        if self.state.pending.is_some() && !self.state.awaiting_new_operand {
            self.evaluate()?;
        }

        self.state.pending = Some(PendingOperation {
            operand: self.state.current_input.clone(),
            operator: op,
        });
        self.state.awaiting_new_operand = true;

        debug!(operator = %op, operand = %self.state.current_input, "operator selected");
        Ok(self.update(StatusUpdate::Cleared))
    }

    /// Applies the pending operation
    ///
    /// Does nothing until both an operator and a second operand exist. On
    /// failure the engine is reset to its initial state before the error is
    /// returned.
    pub fn evaluate(&mut self) -> CalcResult<Update> {
        let Some(pending) = self.state.pending.as_ref() else {
            return Ok(self.update(StatusUpdate::Unchanged));
        };
        if self.state.awaiting_new_operand {
            return Ok(self.update(StatusUpdate::Unchanged));
        }

        match Self::compute(pending, &self.state.current_input) {
            Ok((result, message)) => {
                self.state.current_input = result;
                self.state.pending = None;
                self.state.awaiting_new_operand = true;
                debug!(%message, "evaluated");
                Ok(self.update(StatusUpdate::Success(message)))
            }
            Err(err) => {
                warn!(error = %err, detail = err.detail(), "evaluation failed, resetting");
                self.state.reset();
                Err(err)
            }
        }
    }

    /// Removes the last character of the current operand
    ///
    /// A single remaining character becomes `"0"`.
    pub fn delete_last(&mut self) -> Update {
        let input = &mut self.state.current_input;
        if input.chars().count() > 1 {
            input.pop();
        } else {
            *input = CalculatorState::INITIAL_INPUT.to_string();
        }
        debug!(input = %self.state.current_input, "deleted last character");
        self.update(StatusUpdate::Cleared)
    }

    /// Resets every field to its initial value
    pub fn clear(&mut self) -> Update {
        self.state.reset();
        debug!("cleared");
        self.update(StatusUpdate::Cleared)
    }

    fn compute(pending: &PendingOperation, current: &str) -> CalcResult<(String, String)> {
        let a = parse_operand(&pending.operand).ok_or_else(|| {
            CalcError::invalid_input(format!("first operand '{}'", pending.operand))
        })?;
        let b = parse_operand(current)
            .ok_or_else(|| CalcError::invalid_input(format!("second operand '{current}'")))?;

        let result = format_number(round_result(pending.operator.apply(a, b)?));
        let message = format!(
            "{} {} {} = {}",
            format_number(a),
            pending.operator,
            format_number(b),
            result
        );
        Ok((result, message))
    }

    fn update(&self, status: StatusUpdate) -> Update {
        Update {
            display: self.state.current_input.clone(),
            status,
        }
    }
}

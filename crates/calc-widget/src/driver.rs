//! Unified calculator driver
//!
//! Write the check once, run it against every front end: the bare engine
//! and the full widget both implement [`CalculatorDriver`].

use crate::core::{
    CalcError, CalcResult, CalculatorEngine, CalculatorState, StatusUpdate, Update,
};
use crate::widget::{parse_sequence, CalculatorWidget, KeypadAction};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses a single keypad button
    fn press(&mut self, action: KeypadAction) -> CalcResult<Update>;

    /// Current display text
    fn display(&self) -> String;

    /// Message on the status line, if any
    fn status(&self) -> Option<String>;

    /// Current engine state
    fn state(&self) -> &CalculatorState;

    /// Returns to the initial state
    fn reset(&mut self);

    /// Presses every key of `sequence` in order
    ///
    /// Fails only when the sequence itself cannot be parsed; per-key
    /// outcomes, errors included, are returned in order.
    fn press_sequence(&mut self, sequence: &str) -> CalcResult<Vec<CalcResult<Update>>> {
        let actions = parse_sequence(sequence)?;
        Ok(actions.into_iter().map(|a| self.press(a)).collect())
    }
}

/// Driver over a bare engine, tracking the status line itself
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
    status: Option<String>,
}

impl EngineDriver {
    /// Creates a new engine driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, action: KeypadAction) -> CalcResult<Update> {
        let outcome = match action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => action
                .to_char()
                .ok_or_else(|| CalcError::invalid_input(format!("{action:?}")))
                .and_then(|ch| self.engine.append_digit(ch)),
            KeypadAction::Operator(op) => self.engine.select_operator(op),
            KeypadAction::Equals => self.engine.evaluate(),
            KeypadAction::Delete => Ok(self.engine.delete_last()),
            KeypadAction::Clear => Ok(self.engine.clear()),
        };
        match &outcome {
            Ok(update) => match &update.status {
                StatusUpdate::Unchanged => {}
                StatusUpdate::Cleared => self.status = None,
                StatusUpdate::Success(msg) => self.status = Some(msg.clone()),
            },
            Err(err) => {
                self.engine.clear();
                self.status = Some(err.to_string());
            }
        }
        outcome
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn status(&self) -> Option<String> {
        self.status.clone()
    }

    fn state(&self) -> &CalculatorState {
        self.engine.state()
    }

    fn reset(&mut self) {
        self.engine.clear();
        self.status = None;
    }
}

impl CalculatorDriver for CalculatorWidget {
    fn press(&mut self, action: KeypadAction) -> CalcResult<Update> {
        Self::press(self, action)
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn status(&self) -> Option<String> {
        Self::status(self).map(|line| line.text.clone())
    }

    fn state(&self) -> &CalculatorState {
        self.engine().state()
    }

    fn reset(&mut self) {
        let _ = Self::press(self, KeypadAction::Clear);
    }
}

// ===== Shared checks =====
// These run against ANY CalculatorDriver implementation and panic on the
// first mismatch, like assertions.

/// Digits concatenate and a second decimal point is ignored
#[allow(clippy::unwrap_used)]
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("1203").unwrap();
    assert_eq!(driver.display(), "1203");

    driver.reset();
    driver.press_sequence(".").unwrap();
    assert_eq!(driver.display(), "0.");

    driver.reset();
    driver.press_sequence("3.1.4..").unwrap();
    assert_eq!(driver.display(), "3.14");

    driver.reset();
    driver.press_sequence("D").unwrap();
    assert_eq!(driver.display(), "0");
}

/// Basic arithmetic with the success message
#[allow(clippy::unwrap_used)]
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (sequence, display, message) in [
        ("2+3=", "5", "2 + 3 = 5"),
        ("10-4=", "6", "10 - 4 = 6"),
        ("6*7=", "42", "6 * 7 = 42"),
        ("20/4=", "5", "20 / 4 = 5"),
    ] {
        driver.reset();
        driver.press_sequence(sequence).unwrap();
        assert_eq!(driver.display(), display, "{sequence}");
        assert_eq!(driver.status().as_deref(), Some(message), "{sequence}");
    }
}

/// Operators chain left to right without precedence
#[allow(clippy::unwrap_used)]
pub fn verify_chained_operators<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("2+3*").unwrap();
    assert_eq!(driver.display(), "5");
    driver.press_sequence("4=").unwrap();
    assert_eq!(driver.display(), "20");

    driver.reset();
    driver.press_sequence("9*").unwrap();
    let outcomes = driver.press_sequence("=").unwrap();
    assert!(outcomes[0].is_ok());
    assert_eq!(driver.display(), "9");
    assert_eq!(driver.status(), None);
}

/// Division by zero reports an error and resets
#[allow(clippy::unwrap_used)]
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    let outcomes = driver.press_sequence("5/0=").unwrap();
    assert!(matches!(outcomes.last(), Some(Err(CalcError::DivisionByZero))));
    assert_eq!(driver.display(), "0");
    assert!(driver.state().is_initial());
    assert_eq!(driver.status().as_deref(), Some("Error: Division by zero"));
}

/// Floating-point noise is rounded away
#[allow(clippy::unwrap_used)]
pub fn verify_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("0.1+0.2=").unwrap();
    assert_eq!(driver.display(), "0.3");

    driver.reset();
    driver.press_sequence("1/3=").unwrap();
    assert_eq!(driver.display(), "0.33333333");
}

/// Complete verification suite
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_basic_arithmetic(driver);
    verify_chained_operators(driver);
    verify_division_by_zero(driver);
    verify_rounding(driver);
    driver.reset();
    assert!(driver.state().is_initial());
}

//! Browser bindings for the calculator engine
//!
//! The page keeps one `BrowserCalculator`, forwards button clicks to it and
//! renders what comes back. Errors arrive as rejected `JsValue` strings; the
//! page shows them and removes them after `errorClearDelayMs`.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::{CalcError, CalcResult, CalculatorEngine, Operation, StatusUpdate, Update};
use crate::widget::config::WidgetConfig;
use crate::widget::keypad::{Keypad, KeypadAction};

/// Browser calculator, the wasm entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    engine: CalculatorEngine,
    keypad: Keypad,
    config: WidgetConfig,
    message: String,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            engine: CalculatorEngine::new(),
            keypad: Keypad::new(),
            config: WidgetConfig::default(),
            message: String::new(),
        }
    }

    /// Text for the display field
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.engine.display().to_string()
    }

    /// Last success message, empty when cleared
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// How long the page should keep an error visible
    #[wasm_bindgen(getter, js_name = errorClearDelayMs)]
    pub fn error_clear_delay_ms(&self) -> u32 {
        u32::try_from(self.config.error_clear_delay_ms).unwrap_or(u32::MAX)
    }

    /// Append a digit or decimal point
    #[wasm_bindgen(js_name = appendDigit)]
    pub fn append_digit(&mut self, digit: char) -> Result<String, JsValue> {
        let outcome = self.engine.append_digit(digit);
        self.finish(outcome)
    }

    /// Select `+`, `-`, `*` or `/`
    #[wasm_bindgen(js_name = selectOperator)]
    pub fn select_operator(&mut self, op: char) -> Result<String, JsValue> {
        let outcome = Operation::from_symbol(op)
            .ok_or_else(|| CalcError::invalid_input(format!("unknown operator '{op}'")))
            .and_then(|op| self.engine.select_operator(op));
        self.finish(outcome)
    }

    /// Apply the pending operation
    pub fn evaluate(&mut self) -> Result<String, JsValue> {
        let outcome = self.engine.evaluate();
        self.finish(outcome)
    }

    /// Remove the last character
    #[wasm_bindgen(js_name = deleteLast)]
    pub fn delete_last(&mut self) -> String {
        let update = self.engine.delete_last();
        self.apply(&update);
        update.display
    }

    /// Reset the calculator
    pub fn clear(&mut self) -> String {
        let update = self.engine.clear();
        self.apply(&update);
        update.display
    }

    /// Handle a keypad button click by element ID
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, button_id: &str) -> Result<Option<String>, JsValue> {
        let Some(action) = self.keypad.handle_click(button_id) else {
            return Ok(None);
        };
        let display = match action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => match action.to_char() {
                Some(ch) => self.append_digit(ch)?,
                None => return Ok(None),
            },
            KeypadAction::Operator(op) => {
                let outcome = self.engine.select_operator(op);
                self.finish(outcome)?
            }
            KeypadAction::Equals => self.evaluate()?,
            KeypadAction::Delete => self.delete_last(),
            KeypadAction::Clear => self.clear(),
        };
        Ok(Some(display))
    }
}

impl BrowserCalculator {
    fn finish(&mut self, outcome: CalcResult<Update>) -> Result<String, JsValue> {
        match outcome {
            Ok(update) => {
                self.apply(&update);
                Ok(update.display)
            }
            Err(err) => {
                self.engine.clear();
                self.message.clear();
                Err(JsValue::from_str(&err.to_string()))
            }
        }
    }

    fn apply(&mut self, update: &Update) {
        match &update.status {
            StatusUpdate::Unchanged => {}
            StatusUpdate::Cleared => self.message.clear(),
            StatusUpdate::Success(msg) => self.message.clone_from(msg),
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Page-load hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator initialized successfully!".into());
}

//! Calculator page shell
//!
//! Dispatches keypad clicks to the engine, renders the display and status
//! line into a DOM, and clears error messages after a delay.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod config;
mod dom;
mod keypad;
mod scheduler;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::{CalculatorWidget, StatusLine, StatusStyle};
pub use config::WidgetConfig;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, EVENT_HISTORY_LIMIT, RESULT_ID};
pub use keypad::{button_id, parse_sequence, Keypad, KeypadAction, KeypadButtonDef};
pub use scheduler::{Scheduler, TaskHandle};

//! Calculator widget
//!
//! A pocket-calculator engine plus the page shell that drives it: keypad
//! clicks go in, a display string and a status message come out.
//!
//! - [`core`]: the engine. Accumulates typed operands as text and applies
//!   one pending operation at a time, left to right.
//! - [`widget`]: the page. Maps buttons to engine actions, renders into a
//!   DOM and clears error messages after a delay.
//! - [`driver`]: one interface over both, so checks run against either.
//!
//! # Example
//!
//! ```rust
//! use calc_widget::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.append_digit('3').unwrap();
//! engine.select_operator(Operation::Add).unwrap();
//! engine.append_digit('4').unwrap();
//! engine.select_operator(Operation::Multiply).unwrap(); // evaluates 3 + 4
//! engine.append_digit('2').unwrap();
//!
//! let update = engine.evaluate().unwrap();
//! assert_eq!(update.display, "14");
//! assert_eq!(update.message(), Some("7 * 2 = 14"));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod widget;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_number, round_result};
    pub use crate::core::{
        CalcError, CalcResult, CalculatorEngine, CalculatorState, ErrorKind, Operation,
        StatusUpdate, Update,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::widget::{
        CalculatorWidget, DomEvent, Keypad, KeypadAction, StatusLine, StatusStyle, WidgetConfig,
    };
}

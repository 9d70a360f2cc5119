//! Command handlers - one module per subcommand

pub mod config;
pub mod eval;
pub mod press;
pub mod prompt;

pub use config::{execute_config, render_config};
pub use eval::{evaluate, execute_eval, parse_number, parse_operation, Evaluation};
pub use press::{execute_press, replay, PressReport};
pub use prompt::{execute_prompt, run_prompt};

//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// calcw: drive the calculator widget from the terminal
#[derive(Parser, Debug)]
#[command(name = "calcw")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// How long an error message stays on the status line
    #[arg(long, value_name = "MS", global = true)]
    pub error_clear_ms: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a keypad sequence through the widget
    ///
    /// Tokens: digits, `.`, `+ - * /`, `=` (equals), `C` (clear),
    /// `D` (delete). Whitespace is ignored.
    Press(PressArgs),

    /// Evaluate a single `A OP B` expression
    Eval(EvalArgs),

    /// Ask for two numbers and an operator on stdin
    Prompt,

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Key sequence, e.g. "12+30="
    pub sequence: String,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Let this much time pass after the last key
    #[arg(long, value_name = "MS")]
    pub wait_ms: Option<u64>,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// First operand
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Operator: + - * /
    #[arg(allow_hyphen_values = true)]
    pub op: String,

    /// Second operand
    #[arg(allow_hyphen_values = true)]
    pub b: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Output format
    #[arg(long, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Config output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML
    #[default]
    Yaml,
    /// JSON
    Json,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

//! Press command handler

use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::PressArgs;
use calc_widget::core::CalculatorState;
use calc_widget::widget::{parse_sequence, CalculatorWidget, StatusLine, WidgetConfig};
use serde::Serialize;
use tracing::{debug, info};

/// What the widget shows after a replayed sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressReport {
    /// The replayed key sequence
    pub sequence: String,
    /// Final display text
    pub display: String,
    /// Final status line
    pub status: Option<StatusLine>,
    /// Final engine state
    pub state: CalculatorState,
    /// Every error raised along the way, in order
    pub errors: Vec<String>,
}

/// Replays `sequence` on a fresh widget
///
/// Errors raised by individual keys are collected in the report; only an
/// unparsable sequence fails the replay. With `wait_ms` the widget clock
/// runs on after the last key, which lets a pending error clear.
pub fn replay(config: &WidgetConfig, sequence: &str, wait_ms: Option<u64>) -> CliResult<PressReport> {
    let actions = parse_sequence(sequence)
        .map_err(|e| CliError::invalid_argument(format!("bad key sequence {sequence:?}: {}", e.detail())))?;

    let mut widget = CalculatorWidget::with_config(config.clone());
    let mut errors = Vec::new();
    for action in actions {
        if let Err(err) = widget.press(action) {
            errors.push(err.to_string());
        }
    }
    if let Some(ms) = wait_ms {
        debug!(ms, "advancing widget clock");
        widget.advance(ms);
    }
    info!(sequence, display = widget.display(), errors = errors.len(), "replayed");

    Ok(PressReport {
        sequence: sequence.to_string(),
        display: widget.display().to_string(),
        status: widget.status().cloned(),
        state: widget.engine().state().clone(),
        errors,
    })
}

/// Execute the press command
pub fn execute_press(config: &WidgetConfig, reporter: &Reporter, args: &PressArgs) -> CliResult<()> {
    let report = replay(config, &args.sequence, args.wait_ms)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(CliError::serialization)?;
        println!("{json}");
        return Ok(());
    }

    reporter.display(&report.display);
    if let Some(ref status) = report.status {
        reporter.status(status);
    }
    Ok(())
}

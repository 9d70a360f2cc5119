//! Calculator widget: keypad clicks in, display and status line out

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::config::WidgetConfig;
use super::dom::{DomEvent, MockDom, DISPLAY_ID, RESULT_ID};
use super::keypad::{button_id, Keypad, KeypadAction};
use super::scheduler::{Scheduler, TaskHandle};
use crate::core::{CalcError, CalcResult, CalculatorEngine, StatusUpdate, Update};

/// How a status message is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusStyle {
    /// Result of a successful evaluation
    Success,
    /// Error message, cleared after a delay
    Error,
}

/// Message currently shown on the status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    /// Message text
    pub text: String,
    /// Message style
    pub style: StatusStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidgetTask {
    ClearStatus,
}

/// The calculator page: one engine, its DOM and its timers
#[derive(Debug)]
pub struct CalculatorWidget {
    engine: CalculatorEngine,
    keypad: Keypad,
    dom: MockDom,
    scheduler: Scheduler<WidgetTask>,
    config: WidgetConfig,
    status: Option<StatusLine>,
    pending_clear: Option<TaskHandle>,
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorWidget {
    /// Creates a widget with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WidgetConfig::default())
    }

    /// Creates a widget with custom configuration
    #[must_use]
    pub fn with_config(config: WidgetConfig) -> Self {
        let keypad = Keypad::new();
        let dom = MockDom::calculator(&keypad);
        let mut widget = Self {
            engine: CalculatorEngine::new(),
            keypad,
            dom,
            scheduler: Scheduler::new(),
            config,
            status: None,
            pending_clear: None,
        };
        widget.dispatch(DomEvent::ContentLoaded);
        widget
    }

    /// The engine behind the widget
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// The rendered page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Value of the display field
    #[must_use]
    pub fn display(&self) -> &str {
        self.dom.get_element_value(DISPLAY_ID).unwrap_or_default()
    }

    /// Message on the status line, if any
    #[must_use]
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// True while an error auto-clear is scheduled
    #[must_use]
    pub fn has_pending_clear(&self) -> bool {
        self.pending_clear.is_some()
    }

    /// Handles a DOM event
    ///
    /// Returns the engine outcome for keypad clicks and `None` for anything
    /// else.
    pub fn dispatch(&mut self, event: DomEvent) -> Option<CalcResult<Update>> {
        self.dom.dispatch_event(event.clone());
        match event {
            DomEvent::ContentLoaded => {
                self.render_display();
                info!("Calculator initialized successfully!");
                None
            }
            DomEvent::Click { element_id } => {
                let Some(action) = self.keypad.handle_click(&element_id) else {
                    debug!(%element_id, "click outside keypad ignored");
                    return None;
                };
                Some(self.perform(action))
            }
        }
    }

    /// Clicks the button for `action`
    pub fn press(&mut self, action: KeypadAction) -> CalcResult<Update> {
        self.dom.dispatch_event(DomEvent::click(&button_id(action)));
        self.perform(action)
    }

    /// Advances the widget clock, running any timers that come due
    pub fn advance(&mut self, elapsed_ms: u64) {
        for task in self.scheduler.advance(elapsed_ms) {
            match task {
                WidgetTask::ClearStatus => {
                    debug!("error message expired");
                    self.pending_clear = None;
                    self.set_status(None);
                }
            }
        }
    }

    fn perform(&mut self, action: KeypadAction) -> CalcResult<Update> {
        let outcome = match action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => match action.to_char() {
                Some(ch) => self.engine.append_digit(ch),
                None => Err(CalcError::invalid_input(format!("{action:?}"))),
            },
            KeypadAction::Operator(op) => self.engine.select_operator(op),
            KeypadAction::Equals => self.engine.evaluate(),
            KeypadAction::Delete => Ok(self.engine.delete_last()),
            KeypadAction::Clear => Ok(self.engine.clear()),
        };

        match &outcome {
            Ok(update) => {
                self.render_display();
                match &update.status {
                    StatusUpdate::Unchanged => {}
                    StatusUpdate::Cleared => self.set_status(None),
                    StatusUpdate::Success(msg) => self.set_status(Some(StatusLine {
                        text: msg.clone(),
                        style: StatusStyle::Success,
                    })),
                }
            }
            Err(err) => self.show_error(err),
        }
        outcome
    }

    fn show_error(&mut self, err: &CalcError) {
        warn!(error = %err, "showing error");
        self.engine.clear();
        self.render_display();
        self.set_status(Some(StatusLine {
            text: err.to_string(),
            style: StatusStyle::Error,
        }));
        let handle = self
            .scheduler
            .schedule(self.config.error_clear_delay_ms, WidgetTask::ClearStatus);
        self.pending_clear = Some(handle);
    }

    /// Replaces the status line, dropping any scheduled auto-clear
    fn set_status(&mut self, status: Option<StatusLine>) {
        if let Some(handle) = self.pending_clear.take() {
            self.scheduler.cancel(handle);
        }
        let (text, class_name) = match &status {
            Some(line) => (
                line.text.as_str(),
                match line.style {
                    StatusStyle::Success => self.config.success_class.as_str(),
                    StatusStyle::Error => self.config.error_class.as_str(),
                },
            ),
            None => ("", ""),
        };
        self.dom.set_element_text(RESULT_ID, text);
        self.dom.set_element_class_name(RESULT_ID, class_name);
        self.status = status;
    }

    fn render_display(&mut self) {
        self.dom.set_element_value(DISPLAY_ID, self.engine.display());
    }
}

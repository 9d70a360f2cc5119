//! Widget configuration

use serde::{Deserialize, Serialize};

/// Widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// How long an error message stays visible
    pub error_clear_delay_ms: u64,
    /// Class name of the status line after a successful evaluation
    pub success_class: String,
    /// Class name of the status line while an error is shown
    pub error_class: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            error_clear_delay_ms: Self::DEFAULT_ERROR_CLEAR_DELAY_MS,
            success_class: "result success".to_string(),
            error_class: "result error".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Default error display time
    pub const DEFAULT_ERROR_CLEAR_DELAY_MS: u64 = 3000;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error display time
    #[must_use]
    pub const fn with_error_clear_delay_ms(mut self, delay_ms: u64) -> Self {
        self.error_clear_delay_ms = delay_ms;
        self
    }

    /// Set the success class name
    #[must_use]
    pub fn with_success_class(mut self, class_name: impl Into<String>) -> Self {
        self.success_class = class_name.into();
        self
    }

    /// Set the error class name
    #[must_use]
    pub fn with_error_class(mut self, class_name: impl Into<String>) -> Self {
        self.error_class = class_name.into();
        self
    }
}

//! Clock source configuration types.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "%H:%M".to_string()
}

/// Clock source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockSourceConfig {
    /// chrono strftime-style format for the displayed time
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ClockSourceConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

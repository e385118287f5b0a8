//! Battery and power draw source configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default power supply directory for the first battery
pub const DEFAULT_BATTERY_DIR: &str = "/sys/class/power_supply/BAT0";

fn default_battery_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BATTERY_DIR)
}

/// Battery charge level source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatterySourceConfig {
    /// Power supply directory containing `present` and `capacity`
    #[serde(default = "default_battery_dir")]
    pub battery: PathBuf,
}

impl Default for BatterySourceConfig {
    fn default() -> Self {
        Self {
            battery: default_battery_dir(),
        }
    }
}

/// Power draw source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PowerSourceConfig {
    /// Power supply directory containing `status`, `current_now` and `voltage_now`
    #[serde(default = "default_battery_dir")]
    pub battery: PathBuf,
}

impl Default for PowerSourceConfig {
    fn default() -> Self {
        Self {
            battery: default_battery_dir(),
        }
    }
}

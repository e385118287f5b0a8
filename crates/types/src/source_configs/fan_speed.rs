//! Fan speed source configuration types.

use super::sensor::SensorPath;
use serde::{Deserialize, Serialize};

fn default_fan1() -> SensorPath {
    SensorPath::path("/sys/class/hwmon/hwmon5/fan1_input")
}

fn default_fan2() -> SensorPath {
    SensorPath::path("/sys/class/hwmon/hwmon5/fan2_input")
}

/// Configuration for fan speed source
///
/// Two channels are always shown side by side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FanSpeedConfig {
    #[serde(default = "default_fan1")]
    pub fan1: SensorPath,
    #[serde(default = "default_fan2")]
    pub fan2: SensorPath,
}

impl Default for FanSpeedConfig {
    fn default() -> Self {
        Self {
            fan1: default_fan1(),
            fan2: default_fan2(),
        }
    }
}

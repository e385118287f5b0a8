//! System temperature source configuration types.

use super::sensor::SensorPath;
use serde::{Deserialize, Serialize};

fn default_sensor() -> SensorPath {
    SensorPath::path("/sys/class/hwmon/hwmon6/temp1_input")
}

/// Configuration for system temperature source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemTempConfig {
    /// Millidegree Celsius input file
    #[serde(default = "default_sensor")]
    pub sensor: SensorPath,
}

impl Default for SystemTempConfig {
    fn default() -> Self {
        Self {
            sensor: default_sensor(),
        }
    }
}

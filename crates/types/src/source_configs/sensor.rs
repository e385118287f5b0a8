//! Location of a single hwmon sensor file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where to read a sensor from.
///
/// hwmon indices are assigned at boot and are not stable, so a sensor can
/// also be named by the device's `name` attribute and resolved at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SensorPath {
    /// Fixed file path, e.g. `/sys/class/hwmon/hwmon6/temp1_input`
    Path { path: PathBuf },
    /// Channel file of the hwmon device whose `name` matches
    Hwmon { hwmon: String, file: String },
}

impl SensorPath {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        SensorPath::Path { path: path.into() }
    }

    pub fn hwmon(name: impl Into<String>, file: impl Into<String>) -> Self {
        SensorPath::Hwmon {
            hwmon: name.into(),
            file: file.into(),
        }
    }
}

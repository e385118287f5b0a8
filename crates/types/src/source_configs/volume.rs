//! Volume source configuration types.

use serde::{Deserialize, Serialize};

fn default_card() -> String {
    "0".to_string()
}

fn default_control() -> String {
    "Master Playback Volume".to_string()
}

/// ALSA mixer control to sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeSourceConfig {
    /// Card index or name as accepted by `amixer -c`
    #[serde(default = "default_card")]
    pub card: String,
    /// Mixer element name (see `amixer controls`)
    #[serde(default = "default_control")]
    pub control: String,
}

impl Default for VolumeSourceConfig {
    fn default() -> Self {
        Self {
            card: default_card(),
            control: default_control(),
        }
    }
}

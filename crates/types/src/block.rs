//! Block configuration: which source to sample and on what schedule.

use crate::source_configs::{
    BatterySourceConfig, ClockSourceConfig, FanSpeedConfig, MemorySourceConfig,
    PowerSourceConfig, SystemTempConfig, VolumeSourceConfig,
};
use serde::{Deserialize, Serialize};

/// Type-safe enum for all source configurations.
/// Uses serde tag for JSON serialization: {"source_type": "battery", ...}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source_type")]
pub enum SourceConfig {
    #[serde(rename = "clock")]
    Clock(ClockSourceConfig),

    #[serde(rename = "battery")]
    Battery(BatterySourceConfig),

    #[serde(rename = "power")]
    Power(PowerSourceConfig),

    #[serde(rename = "system_temp")]
    SystemTemp(SystemTempConfig),

    #[serde(rename = "fan_speed")]
    FanSpeed(FanSpeedConfig),

    #[serde(rename = "volume")]
    Volume(VolumeSourceConfig),

    #[serde(rename = "memory")]
    Memory(MemorySourceConfig),
}

impl SourceConfig {
    /// Get the source type ID string
    pub fn source_type(&self) -> &'static str {
        match self {
            SourceConfig::Clock(_) => "clock",
            SourceConfig::Battery(_) => "battery",
            SourceConfig::Power(_) => "power",
            SourceConfig::SystemTemp(_) => "system_temp",
            SourceConfig::FanSpeed(_) => "fan_speed",
            SourceConfig::Volume(_) => "volume",
            SourceConfig::Memory(_) => "memory",
        }
    }
}

/// One entry of the ordered block table.
///
/// `interval`, `align` and `delay` are whole seconds. `align == 0` means the
/// block is not aligned; `delay == -1` on an aligned block fires it once at
/// startup and then follows the aligned cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockConfig {
    #[serde(flatten)]
    pub source: SourceConfig,
    pub interval: i64,
    #[serde(default)]
    pub align: i64,
    #[serde(default)]
    pub delay: i64,
}

impl BlockConfig {
    pub fn new(source: SourceConfig, interval: i64, align: i64, delay: i64) -> Self {
        Self {
            source,
            interval,
            align,
            delay,
        }
    }
}

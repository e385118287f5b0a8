//! Built-in sample readers
//!
//! Each reader samples one system source (clock, battery, sensors, mixer,
//! memory) and maps it to an icon, text and color.

mod battery;
mod clock;
pub mod discovery;
mod fan_speed;
mod memory;
mod power;
mod sysfs;
mod system_temp;
mod volume;

pub use battery::{battery_icon, BatteryReader};
pub use clock::{clock_sample, ClockReader};
pub use discovery::{list_power_supplies, HwmonDevice, SensorDiscovery};
pub use fan_speed::{fan_sample, FanSpeedReader};
pub use memory::{format_size, memory_sample, MemoryReader, MemoryStats};
pub use power::{watts, PowerHistory, PowerReader};
pub use system_temp::{temperature_sample, SystemTempReader};
pub use volume::{parse_amixer_values, perceptual_volume, volume_sample, VolumeReader};

use crate::core::BoxedSampleReader;
use rg_status_types::SourceConfig;

/// Create the reader for a configured source
///
/// Sensor paths are resolved through `discovery` here, once. A sensor that
/// cannot be resolved still gets a reader; it reports itself unavailable.
pub fn create_reader(source: &SourceConfig, discovery: &SensorDiscovery) -> BoxedSampleReader {
    match source {
        SourceConfig::Clock(cfg) => Box::new(ClockReader::new(cfg.clone())),
        SourceConfig::Battery(cfg) => Box::new(BatteryReader::new(cfg.clone())),
        SourceConfig::Power(cfg) => Box::new(PowerReader::new(cfg.clone())),
        SourceConfig::SystemTemp(cfg) => {
            Box::new(SystemTempReader::new(discovery.resolve(&cfg.sensor)))
        }
        SourceConfig::FanSpeed(cfg) => Box::new(FanSpeedReader::new(
            discovery.resolve(&cfg.fan1),
            discovery.resolve(&cfg.fan2),
        )),
        SourceConfig::Volume(cfg) => Box::new(VolumeReader::new(cfg.clone())),
        SourceConfig::Memory(_) => Box::new(MemoryReader::new()),
    }
}

//! Source configuration types for all data sources.

pub mod battery;
pub mod clock;
pub mod fan_speed;
pub mod memory;
pub mod sensor;
pub mod system_temp;
pub mod volume;

pub use battery::{BatterySourceConfig, PowerSourceConfig, DEFAULT_BATTERY_DIR};
pub use clock::ClockSourceConfig;
pub use fan_speed::FanSpeedConfig;
pub use memory::MemorySourceConfig;
pub use sensor::SensorPath;
pub use system_temp::SystemTempConfig;
pub use volume::VolumeSourceConfig;

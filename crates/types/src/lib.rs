//! rg-status-types: Shared data types for the rg-status aggregator.
//!
//! This crate contains pure data types (colors, samples, block and source
//! configs) shared by the scheduler, the readers and the configuration layer.
//! It performs no I/O.

pub mod block;
pub mod color;
pub mod sample;
pub mod source_configs;

// Re-export commonly used types at the crate root for convenience
pub use block::{BlockConfig, SourceConfig};
pub use color::{Color, ParseColorError};
pub use sample::Sample;
pub use source_configs::{
    BatterySourceConfig, ClockSourceConfig, FanSpeedConfig, MemorySourceConfig,
    PowerSourceConfig, SensorPath, SystemTempConfig, VolumeSourceConfig, DEFAULT_BATTERY_DIR,
};

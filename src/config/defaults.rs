//! Built-in block table used when no config file exists

use rg_status_types::{
    BatterySourceConfig, BlockConfig, ClockSourceConfig, Color, FanSpeedConfig,
    MemorySourceConfig, PowerSourceConfig, SourceConfig, SystemTempConfig, VolumeSourceConfig,
};

/// Default bar background
pub const BAR_COLOR: Color = Color::from_hex_const("#282828");

/// Reference epoch the clock block is aligned to (a whole minute)
pub const CLOCK_ALIGN_EPOCH: i64 = 1_592_384_460;

/// The default block table, in display order.
///
/// The clock fires immediately at startup and then on every whole minute.
pub fn default_blocks() -> Vec<BlockConfig> {
    vec![
        BlockConfig::new(SourceConfig::Volume(VolumeSourceConfig::default()), 1, 0, 0),
        BlockConfig::new(SourceConfig::FanSpeed(FanSpeedConfig::default()), 20, 0, 0),
        BlockConfig::new(SourceConfig::Battery(BatterySourceConfig::default()), 120, 0, 0),
        BlockConfig::new(SourceConfig::Power(PowerSourceConfig::default()), 20, 0, 0),
        BlockConfig::new(SourceConfig::SystemTemp(SystemTempConfig::default()), 20, 0, 0),
        BlockConfig::new(SourceConfig::Memory(MemorySourceConfig::default()), 10, 0, 0),
        BlockConfig::new(
            SourceConfig::Clock(ClockSourceConfig::default()),
            60,
            CLOCK_ALIGN_EPOCH,
            -1,
        ),
    ]
}

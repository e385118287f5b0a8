//! Configuration management

mod defaults;
mod error;
mod settings;

pub use defaults::{default_blocks, BAR_COLOR, CLOCK_ALIGN_EPOCH};
pub use error::ConfigError;
pub use settings::{AppConfig, CONFIG_VERSION};

//! Application configuration

use log::info;
use rg_status_types::{BlockConfig, Color};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;
use super::ConfigError;
use crate::core::constants::MAX_SCHEDULE_SECS;
use crate::core::{Markup, PublisherKind};

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_background() -> Color {
    defaults::BAR_COLOR
}

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Bar background, used behind every block
    #[serde(default = "default_background")]
    pub background: Color,
    /// Color markup dialect
    #[serde(default)]
    pub markup: Markup,
    /// Where the status line goes
    #[serde(default)]
    pub publisher: PublisherKind,
    /// Ordered block table. Order is display order.
    #[serde(default = "defaults::default_blocks")]
    pub blocks: Vec<BlockConfig>,
}

impl AppConfig {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; the built-in block table is used.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("No config at {}, using built-in defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!("Loaded {} blocks from {}", config.blocks.len(), path.display());
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(write_err)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dirs = directories::ProjectDirs::from("com", "github.hilgardt_collab", "rg-status")
            .ok_or(ConfigError::NoConfigDir)?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Check the invariants the scheduler relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blocks.is_empty() {
            return Err(ConfigError::NoBlocks);
        }
        for (index, block) in self.blocks.iter().enumerate() {
            if block.interval <= 0 {
                return Err(ConfigError::InvalidInterval {
                    index,
                    source_type: block.source.source_type().to_string(),
                    interval: block.interval,
                });
            }
            let out_of_range = [("interval", block.interval), ("delay", block.delay)]
                .into_iter()
                .find(|&(_, value)| value.unsigned_abs() > MAX_SCHEDULE_SECS.unsigned_abs());
            if let Some((field, value)) = out_of_range {
                return Err(ConfigError::ScheduleOutOfRange {
                    index,
                    source_type: block.source.source_type().to_string(),
                    field,
                    value,
                    limit: MAX_SCHEDULE_SECS,
                });
            }
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            background: default_background(),
            markup: Markup::default(),
            publisher: PublisherKind::default(),
            blocks: defaults::default_blocks(),
        }
    }
}

//! Configuration errors
//!
//! These are the only fatal errors in the program and can only happen at
//! startup, before the first polling pass.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("block {index} ({source_type}): interval must be positive, got {interval}")]
    InvalidInterval {
        index: usize,
        source_type: String,
        interval: i64,
    },

    #[error("block {index} ({source_type}): {field} {value} is out of range (limit {limit}s)")]
    ScheduleOutOfRange {
        index: usize,
        source_type: String,
        field: &'static str,
        value: i64,
        limit: i64,
    },

    #[error("no blocks configured")]
    NoBlocks,
}

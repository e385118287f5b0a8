//! rg-status: a periodic status line aggregator for Linux
//!
//! This library provides the core functionality for rg-status, including:
//! - The block scheduler that decides when each block runs and publishes
//!   the combined status line
//! - Sample readers for clock, battery, power, sensors, volume and memory
//! - Fragment formatting with status bar color markup
//! - Configuration management

pub mod config;
pub mod core;
pub mod sources;

// Re-export commonly used types
pub use crate::config::{AppConfig, ConfigError};
pub use crate::core::{BlockRegistry, Publisher, SampleReader, Scheduler};

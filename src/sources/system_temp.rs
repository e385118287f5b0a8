//! System temperature reader
//!
//! Reads one hwmon temperature channel (millidegrees Celsius).

use super::sysfs::read_value;
use crate::core::constants::UNAVAILABLE_TEXT;
use crate::core::{ReaderMetadata, SampleReader};
use rg_status_types::{Color, Sample};
use std::path::PathBuf;

const TEMP_COLOR: Color = Color::from_hex_const("#e85c6a");

const ICON_HOT: &str = "\u{e20b}";
const ICON_WARM: &str = "\u{e20a}";
const ICON_COOL: &str = "\u{e20c}";

/// Sample for a temperature in degrees Celsius, `None` if unreadable
pub fn temperature_sample(celsius: Option<f64>) -> Sample {
    let temp = celsius.unwrap_or(0.0);
    let icon = if temp >= 60.0 {
        ICON_HOT
    } else if temp >= 40.0 {
        ICON_WARM
    } else {
        ICON_COOL
    };

    let text = match celsius {
        Some(c) => format!("{:02.0}°C", c),
        None => UNAVAILABLE_TEXT.to_string(),
    };

    Sample::new(icon, text, TEMP_COLOR)
}

pub struct SystemTempReader {
    metadata: ReaderMetadata,
    /// `None` when the configured sensor could not be resolved at startup
    input: Option<PathBuf>,
}

impl SystemTempReader {
    pub fn new(input: Option<PathBuf>) -> Self {
        Self {
            metadata: ReaderMetadata {
                id: "system_temp",
                name: "Temperature",
                description: "Temperature of one hwmon sensor",
            },
            input,
        }
    }
}

impl SampleReader for SystemTempReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Sample {
        let celsius = self
            .input
            .as_deref()
            .and_then(read_value::<f64>)
            .map(|milli| milli / 1000.0);
        temperature_sample(celsius)
    }
}

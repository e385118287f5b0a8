//! Fan speed reader
//!
//! Shows two fan channels side by side, with a distinct icon while both fans
//! are stopped.

use super::sysfs::read_value;
use crate::core::constants::UNAVAILABLE_TEXT;
use crate::core::{ReaderMetadata, SampleReader};
use rg_status_types::{Color, Sample};
use std::path::{Path, PathBuf};

const FAN_COLOR: Color = Color::from_hex_const("#88c0d0");

const ICON_SPINNING: &str = "\u{f70f}";
const ICON_STOPPED: &str = "\u{fd1b}";

/// Sample for two fan readings in RPM, `None` for an unreadable channel
pub fn fan_sample(fan1: Option<i64>, fan2: Option<i64>) -> Sample {
    let show = |rpm: Option<i64>| match rpm {
        Some(rpm) => rpm.to_string(),
        None => UNAVAILABLE_TEXT.to_string(),
    };

    let (icon, text) = match (fan1, fan2) {
        (None, None) => (ICON_SPINNING, format!("{} {}", show(fan1), show(fan2))),
        (Some(0), Some(0)) => (ICON_STOPPED, " ".to_string()),
        _ => (ICON_SPINNING, format!("{} {} rpm", show(fan1), show(fan2))),
    };

    Sample::new(icon, text, FAN_COLOR)
}

pub struct FanSpeedReader {
    metadata: ReaderMetadata,
    fan1: Option<PathBuf>,
    fan2: Option<PathBuf>,
}

impl FanSpeedReader {
    pub fn new(fan1: Option<PathBuf>, fan2: Option<PathBuf>) -> Self {
        Self {
            metadata: ReaderMetadata {
                id: "fan_speed",
                name: "Fan Speed",
                description: "RPM of two hwmon fan channels",
            },
            fan1,
            fan2,
        }
    }
}

fn read_rpm(path: Option<&Path>) -> Option<i64> {
    path.and_then(read_value::<i64>)
}

impl SampleReader for FanSpeedReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Sample {
        fan_sample(read_rpm(self.fan1.as_deref()), read_rpm(self.fan2.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_spinning() {
        let sample = fan_sample(Some(2400), Some(2100));
        assert_eq!(sample.text, "2400 2100 rpm");
        assert_eq!(sample.icon, ICON_SPINNING);
    }

    #[test]
    fn test_both_stopped() {
        let sample = fan_sample(Some(0), Some(0));
        assert_eq!(sample.text, " ");
        assert_eq!(sample.icon, ICON_STOPPED);
    }

    #[test]
    fn test_both_unreadable() {
        let sample = fan_sample(None, None);
        assert_eq!(sample.text, format!("{} {}", UNAVAILABLE_TEXT, UNAVAILABLE_TEXT));
        assert_eq!(sample.icon, ICON_SPINNING);
    }

    #[test]
    fn test_one_unreadable() {
        let sample = fan_sample(Some(0), None);
        assert_eq!(sample.text, format!("0 {} rpm", UNAVAILABLE_TEXT));
        assert_eq!(sample.icon, ICON_SPINNING);
    }

    #[test]
    fn test_reads_channels() {
        let dir = tempfile::tempdir().unwrap();
        let fan1 = dir.path().join("fan1_input");
        let fan2 = dir.path().join("fan2_input");
        std::fs::write(&fan1, "3100\n").unwrap();
        std::fs::write(&fan2, "0\n").unwrap();

        let sample = FanSpeedReader::new(Some(fan1), Some(fan2)).read();
        assert_eq!(sample.text, "3100 0 rpm");
    }
}

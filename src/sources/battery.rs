//! Battery charge reader

use super::sysfs::{read_attribute, read_value};
use crate::core::constants::UNAVAILABLE_TEXT;
use crate::core::{ReaderMetadata, SampleReader};
use rg_status_types::{BatterySourceConfig, Color, Sample};
use std::path::PathBuf;

const BATTERY_COLOR: Color = Color::from_hex_const("#a3be8c");

/// Shown instead of a percentage when no battery is inserted (nf-fa-question)
const NOT_PRESENT_TEXT: &str = "\u{f128}";

const ICON_FULL: &str = "\u{f240} ";
const ICON_THREE_QUARTERS: &str = "\u{f241} ";
const ICON_HALF: &str = "\u{f242} ";
const ICON_QUARTER: &str = "\u{f243} ";
const ICON_EMPTY: &str = "\u{f244} ";

/// Battery icon for a capacity in percent.
///
/// An unknown capacity shows the full icon, same as 80% and above.
pub fn battery_icon(capacity: Option<i64>) -> &'static str {
    match capacity {
        None => ICON_FULL,
        Some(cap) if cap >= 80 => ICON_FULL,
        Some(cap) if cap >= 60 => ICON_THREE_QUARTERS,
        Some(cap) if cap >= 40 => ICON_HALF,
        Some(cap) if cap >= 20 => ICON_QUARTER,
        Some(_) => ICON_EMPTY,
    }
}

pub struct BatteryReader {
    metadata: ReaderMetadata,
    battery: PathBuf,
}

impl BatteryReader {
    pub fn new(config: BatterySourceConfig) -> Self {
        Self {
            metadata: ReaderMetadata {
                id: "battery",
                name: "Battery",
                description: "Battery charge level",
            },
            battery: config.battery,
        }
    }
}

impl SampleReader for BatteryReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Sample {
        let mut capacity = None;
        let text = match read_attribute(&self.battery.join("present")) {
            None => UNAVAILABLE_TEXT.to_string(),
            Some(present) if !present.starts_with('1') => NOT_PRESENT_TEXT.to_string(),
            Some(_) => match read_value::<i64>(&self.battery.join("capacity")) {
                None => UNAVAILABLE_TEXT.to_string(),
                Some(cap) => {
                    capacity = Some(cap);
                    format!("{}%", cap)
                }
            },
        };

        Sample::new(battery_icon(capacity), text, BATTERY_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn reader_for(dir: &std::path::Path) -> BatteryReader {
        BatteryReader::new(BatterySourceConfig {
            battery: dir.to_path_buf(),
        })
    }

    #[test]
    fn test_icon_thresholds() {
        assert_eq!(battery_icon(Some(100)), ICON_FULL);
        assert_eq!(battery_icon(Some(80)), ICON_FULL);
        assert_eq!(battery_icon(Some(79)), ICON_THREE_QUARTERS);
        assert_eq!(battery_icon(Some(60)), ICON_THREE_QUARTERS);
        assert_eq!(battery_icon(Some(40)), ICON_HALF);
        assert_eq!(battery_icon(Some(20)), ICON_QUARTER);
        assert_eq!(battery_icon(Some(19)), ICON_EMPTY);
        assert_eq!(battery_icon(None), ICON_FULL);
    }

    #[test]
    fn test_reads_capacity() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("present"), "1\n").unwrap();
        fs::write(dir.path().join("capacity"), "57\n").unwrap();

        let sample = reader_for(dir.path()).read();
        assert_eq!(sample.text, "57%");
        assert_eq!(sample.icon, ICON_HALF);
    }

    #[test]
    fn test_battery_not_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("present"), "0\n").unwrap();

        let sample = reader_for(dir.path()).read();
        assert_eq!(sample.text, NOT_PRESENT_TEXT);
        assert_eq!(sample.icon, ICON_FULL);
    }

    #[test]
    fn test_missing_battery_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let sample = reader_for(&dir.path().join("BAT9")).read();
        assert_eq!(sample.text, UNAVAILABLE_TEXT);
        assert_eq!(sample.icon, ICON_FULL);
    }

    #[test]
    fn test_garbage_capacity_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("present"), "1\n").unwrap();
        fs::write(dir.path().join("capacity"), "lots\n").unwrap();
        assert_eq!(reader_for(dir.path()).read().text, UNAVAILABLE_TEXT);
    }
}

//! Power draw reader
//!
//! Reports battery discharge power in watts, smoothed over the last few
//! samples. Disappears entirely while the battery reports itself full.

use super::sysfs::{read_attribute, read_value};
use crate::core::constants::{POWER_HISTORY_LEN, UNAVAILABLE_TEXT};
use crate::core::{ReaderMetadata, SampleReader};
use rg_status_types::{Color, PowerSourceConfig, Sample};
use std::path::PathBuf;

const POWER_COLOR: Color = Color::from_hex_const("#d06c4c");

/// nf-fa-bolt
const POWER_ICON: &str = "\u{f0e7}";

/// Fixed-size ring buffer of recent wattage samples
#[derive(Debug, Clone, Default)]
pub struct PowerHistory {
    samples: [f64; POWER_HISTORY_LEN],
    /// Slot the next sample goes into
    next: usize,
    /// Number of valid samples, at most `POWER_HISTORY_LEN`
    len: usize,
}

impl PowerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sample, overwriting the oldest once full
    pub fn push(&mut self, watts: f64) {
        self.samples[self.next] = watts;
        self.next = (self.next + 1) % POWER_HISTORY_LEN;
        self.len = (self.len + 1).min(POWER_HISTORY_LEN);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mean of the valid samples, `None` when empty
    pub fn average(&self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }
        // Until the buffer wraps, the valid samples are the leading slots
        let sum: f64 = self.samples[..self.len].iter().sum();
        Some(sum / self.len as f64)
    }
}

/// Watts from micro-amps and micro-volts. Zero on either side means the
/// driver has no reading, not that nothing is drawn.
pub fn watts(current_ua: i64, voltage_uv: i64) -> Option<f64> {
    if current_ua == 0 || voltage_uv == 0 {
        return None;
    }
    Some(current_ua as f64 / 1e6 * voltage_uv as f64 / 1e6)
}

pub struct PowerReader {
    metadata: ReaderMetadata,
    battery: PathBuf,
    history: PowerHistory,
}

impl PowerReader {
    pub fn new(config: PowerSourceConfig) -> Self {
        Self {
            metadata: ReaderMetadata {
                id: "power",
                name: "Power Draw",
                description: "Battery power draw, averaged over recent samples",
            },
            battery: config.battery,
            history: PowerHistory::new(),
        }
    }

    pub fn history(&self) -> &PowerHistory {
        &self.history
    }

    fn read_watts(&self) -> Option<f64> {
        let current = read_value::<i64>(&self.battery.join("current_now"))?;
        let voltage = read_value::<i64>(&self.battery.join("voltage_now"))?;
        watts(current, voltage)
    }
}

impl SampleReader for PowerReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Sample {
        if read_attribute(&self.battery.join("status")).as_deref() == Some("Full") {
            return Sample::empty(POWER_COLOR);
        }

        let text = match self.read_watts() {
            Some(w) => {
                self.history.push(w);
                match self.history.average() {
                    Some(avg) => format!("{:.1}W", avg),
                    None => UNAVAILABLE_TEXT.to_string(),
                }
            }
            None => UNAVAILABLE_TEXT.to_string(),
        };

        Sample::new(POWER_ICON, text, POWER_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_history_average() {
        let mut history = PowerHistory::new();
        assert_eq!(history.average(), None);

        for w in [10.0, 20.0, 30.0] {
            history.push(w);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.average(), Some(20.0));
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = PowerHistory::new();
        for w in [10.0, 20.0, 30.0, 40.0, 50.0] {
            history.push(w);
        }
        assert_eq!(history.average(), Some(30.0));

        history.push(60.0);
        assert_eq!(history.len(), POWER_HISTORY_LEN);
        // 20 + 30 + 40 + 50 + 60
        assert_eq!(history.average(), Some(40.0));
    }

    #[test]
    fn test_zero_is_unavailable() {
        assert_eq!(watts(0, 12_000_000), None);
        assert_eq!(watts(1_000_000, 0), None);
        assert_eq!(watts(1_500_000, 12_000_000), Some(18.0));
    }

    fn battery_dir(status: &str, current: &str, voltage: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("status"), status).unwrap();
        fs::write(dir.path().join("current_now"), current).unwrap();
        fs::write(dir.path().join("voltage_now"), voltage).unwrap();
        dir
    }

    fn reader_for(dir: &std::path::Path) -> PowerReader {
        PowerReader::new(PowerSourceConfig {
            battery: dir.to_path_buf(),
        })
    }

    #[test]
    fn test_reports_smoothed_watts() {
        let dir = battery_dir("Discharging\n", "1000000\n", "10000000\n");
        let mut reader = reader_for(dir.path());
        let sample = reader.read();
        assert_eq!(sample.icon, POWER_ICON);
        assert_eq!(sample.text, "10.0W");

        fs::write(dir.path().join("current_now"), "2000000\n").unwrap();
        assert_eq!(reader.read().text, "15.0W");
        assert_eq!(reader.history().len(), 2);
    }

    #[test]
    fn test_full_battery_hides_block() {
        let dir = battery_dir("Full\n", "1000000\n", "10000000\n");
        let mut reader = reader_for(dir.path());
        assert!(reader.read().is_empty());
        assert!(reader.history().is_empty());
    }

    #[test]
    fn test_zero_current_is_unavailable() {
        let dir = battery_dir("Discharging\n", "0\n", "10000000\n");
        let mut reader = reader_for(dir.path());
        let sample = reader.read();
        assert_eq!(sample.icon, POWER_ICON);
        assert_eq!(sample.text, UNAVAILABLE_TEXT);
        assert!(reader.history().is_empty());
    }

    #[test]
    fn test_missing_files_are_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let sample = reader_for(dir.path()).read();
        assert_eq!(sample.text, UNAVAILABLE_TEXT);
    }
}

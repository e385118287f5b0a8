//! Clock reader
//!
//! Shows the local time next to a clock-face icon whose hands match the hour.

use crate::core::constants::UNAVAILABLE_ICON;
use crate::core::{ReaderMetadata, SampleReader};
use chrono::{DateTime, Local, TimeZone, Timelike};
use rg_status_types::{ClockSourceConfig, Color, Sample};
use std::fmt::{self, Write};

const CLOCK_COLOR: Color = Color::from_hex_const("#ffffff");

/// Weather-icons clock faces for 12 o'clock, 1 o'clock, ... 11 o'clock
const CLOCK_FACES: [&str; 12] = [
    "\u{e381}", "\u{e382}", "\u{e383}", "\u{e384}", "\u{e385}", "\u{e386}",
    "\u{e387}", "\u{e388}", "\u{e389}", "\u{e38a}", "\u{e38b}", "\u{e38c}",
];

/// Render `time` with `format`.
///
/// An invalid format string falls back to the warning icon with no text.
pub fn clock_sample<Tz: TimeZone>(time: &DateTime<Tz>, format: &str) -> Sample
where
    Tz::Offset: fmt::Display,
{
    let mut text = String::new();
    if write!(text, "{}", time.format(format)).is_err() {
        log::debug!("Invalid clock format {:?}", format);
        return Sample::new(UNAVAILABLE_ICON, "", CLOCK_COLOR);
    }

    let face = CLOCK_FACES[(time.hour() % 12) as usize];
    Sample::new(face, text, CLOCK_COLOR)
}

pub struct ClockReader {
    metadata: ReaderMetadata,
    config: ClockSourceConfig,
}

impl ClockReader {
    pub fn new(config: ClockSourceConfig) -> Self {
        Self {
            metadata: ReaderMetadata {
                id: "clock",
                name: "Clock",
                description: "Local time with an hour clock face",
            },
            config,
        }
    }
}

impl Default for ClockReader {
    fn default() -> Self {
        Self::new(ClockSourceConfig::default())
    }
}

impl SampleReader for ClockReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Sample {
        clock_sample(&Local::now(), &self.config.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_afternoon_wraps_to_clock_face() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 15, 42, 7).unwrap();
        let sample = clock_sample(&time, "%H:%M");
        assert_eq!(sample.text, "15:42");
        assert_eq!(sample.icon, "\u{e384}");
        assert_eq!(sample.color, CLOCK_COLOR);
    }

    #[test]
    fn test_midnight_and_noon_share_face() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(clock_sample(&midnight, "%H:%M").icon, CLOCK_FACES[0]);
        assert_eq!(clock_sample(&noon, "%H:%M").icon, CLOCK_FACES[0]);
    }

    #[test]
    fn test_invalid_format_is_unavailable() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let sample = clock_sample(&time, "%Q");
        assert_eq!(sample.icon, UNAVAILABLE_ICON);
        assert!(sample.text.is_empty());
    }
}

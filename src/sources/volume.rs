//! Volume reader
//!
//! Samples an ALSA mixer element through `amixer` and converts its raw level
//! to the perceived percentage the desktop mixer would show.

use crate::core::constants::UNAVAILABLE_TEXT;
use crate::core::{ReaderMetadata, SampleReader};
use once_cell::sync::Lazy;
use regex::Regex;
use rg_status_types::{Color, Sample, VolumeSourceConfig};
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

const VOLUME_COLOR: Color = Color::from_hex_const("#ebcb8b");

/// Longest wait for `amixer` before the reading is given up
const AMIXER_TIMEOUT: Duration = Duration::from_millis(500);

const ICON_MUTED: &str = "\u{fc5d}";
const ICON_LOW: &str = "\u{fa7e}";
const ICON_MEDIUM: &str = "\u{fa7f}";
const ICON_HIGH: &str = "\u{fa7d}";

/// Measured (raw level, perceived percent) pairs.
///
/// The raw scale is 0..=127 and roughly logarithmic; no closed form fits it
/// well, so levels in between are interpolated linearly.
const CALIBRATION: [(i64, i64); 72] = [
    (0, 0), (5, 1), (10, 2), (15, 3), (19, 4), (23, 5), (27, 7), (31, 8),
    (34, 9), (37, 10), (40, 11), (43, 12), (46, 14), (49, 15), (52, 16), (54, 17),
    (56, 18), (58, 20), (60, 21), (62, 22), (64, 23), (66, 24), (68, 26), (70, 27),
    (72, 29), (74, 30), (76, 32), (78, 33), (80, 35), (82, 37), (84, 38), (86, 40),
    (88, 42), (89, 43), (90, 44), (91, 45), (92, 46), (93, 47), (94, 49), (95, 50),
    (96, 51), (97, 52), (98, 53), (99, 54), (100, 56), (101, 57), (102, 58), (103, 60),
    (104, 61), (105, 62), (106, 64), (107, 65), (108, 67), (109, 68), (110, 69), (111, 71),
    (112, 73), (113, 74), (114, 76), (115, 77), (116, 79), (117, 81), (118, 83), (119, 84),
    (120, 86), (121, 88), (122, 90), (123, 92), (124, 94), (125, 96), (126, 98), (127, 100),
];

/// `  : values=87,87` line of `amixer cget`
static VALUES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*:\s*values=(-?\d+)").expect("valid regex literal")
});

/// Convert a raw mixer level to a perceived percentage (0..=100).
///
/// Levels outside the calibrated range are clamped to it.
pub fn perceptual_volume(raw: i64) -> i64 {
    let (min_raw, _) = CALIBRATION[0];
    let (max_raw, _) = CALIBRATION[CALIBRATION.len() - 1];
    let raw = raw.clamp(min_raw, max_raw);

    // First bracket whose upper bound reaches `raw`
    let pos = CALIBRATION
        .windows(2)
        .position(|pair| pair[1].0 >= raw)
        .unwrap_or(CALIBRATION.len() - 2);

    let (lo_raw, lo_pct) = CALIBRATION[pos];
    let (hi_raw, hi_pct) = CALIBRATION[pos + 1];
    let pct = lo_pct as f64 + ((raw - lo_raw) * (hi_pct - lo_pct)) as f64 / (hi_raw - lo_raw) as f64;
    pct.round() as i64
}

/// Sample for a raw mixer level, `None` if the mixer could not be read
pub fn volume_sample(raw: Option<i64>) -> Sample {
    let Some(raw) = raw else {
        return Sample::new(ICON_HIGH, UNAVAILABLE_TEXT, VOLUME_COLOR);
    };

    let pct = perceptual_volume(raw);
    let icon = if pct == 0 {
        ICON_MUTED
    } else if pct < 25 {
        ICON_LOW
    } else if pct < 50 {
        ICON_MEDIUM
    } else {
        ICON_HIGH
    };
    let text = if pct == 0 {
        " ".to_string()
    } else {
        format!("{}%", pct)
    };

    Sample::new(icon, text, VOLUME_COLOR)
}

/// First channel value from `amixer cget` output
pub fn parse_amixer_values(output: &str) -> Option<i64> {
    VALUES_RE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub struct VolumeReader {
    metadata: ReaderMetadata,
    config: VolumeSourceConfig,
}

impl VolumeReader {
    pub fn new(config: VolumeSourceConfig) -> Self {
        Self {
            metadata: ReaderMetadata {
                id: "volume",
                name: "Volume",
                description: "ALSA mixer volume",
            },
            config,
        }
    }

    fn query_raw_level(&self) -> Option<i64> {
        let mut command = Command::new("amixer");
        command
            .arg("-c")
            .arg(&self.config.card)
            .arg("cget")
            .arg(format!("name={}", self.config.control));

        let output = command_output(&mut command, AMIXER_TIMEOUT)?;
        parse_amixer_values(&output)
    }
}

/// Run `command` and return its stdout, or `None` if it fails or is still
/// running after `timeout`. A command that times out is killed.
fn command_output(command: &mut Command, timeout: Duration) -> Option<String> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| log::debug!("Failed to run {:?}: {}", command.get_program(), e))
        .ok()?;

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) if status.success() => {
                let mut out = String::new();
                child.stdout.take()?.read_to_string(&mut out).ok()?;
                return Some(out);
            }
            Ok(Some(status)) => {
                log::debug!("{:?} exited with {}", command.get_program(), status);
                return None;
            }
            Ok(None) if start.elapsed() >= timeout => {
                log::debug!("{:?} timed out after {:?}", command.get_program(), timeout);
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
            Ok(None) => std::thread::sleep(Duration::from_millis(5)),
            Err(e) => {
                log::debug!("Failed to wait for {:?}: {}", command.get_program(), e);
                return None;
            }
        }
    }
}

impl Default for VolumeReader {
    fn default() -> Self {
        Self::new(VolumeSourceConfig::default())
    }
}

impl SampleReader for VolumeReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Sample {
        volume_sample(self.query_raw_level())
    }
}

//! One-time hwmon sensor discovery
//!
//! hwmon device numbers depend on driver load order, so sensors can be
//! configured by device name instead. The scan runs once at startup; readers
//! only ever see the resolved file paths.

use log::{debug, info, warn};
use rg_status_types::SensorPath;
use std::path::{Path, PathBuf};

/// Default hwmon class directory
pub const HWMON_ROOT: &str = "/sys/class/hwmon";

/// Default power supply class directory
pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// A discovered hwmon device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HwmonDevice {
    /// Contents of the device's `name` attribute (e.g. "coretemp")
    pub name: String,
    /// Device directory (e.g. /sys/class/hwmon/hwmon3)
    pub path: PathBuf,
    /// Temperature and fan input files present on the device
    pub channels: Vec<String>,
}

/// Result of scanning the hwmon class directory
#[derive(Debug, Clone, Default)]
pub struct SensorDiscovery {
    devices: Vec<HwmonDevice>,
}

impl SensorDiscovery {
    /// Scan the system hwmon directory
    pub fn scan() -> Self {
        Self::scan_dir(Path::new(HWMON_ROOT))
    }

    /// Scan an hwmon-style directory
    pub fn scan_dir(root: &Path) -> Self {
        info!("Scanning for hwmon devices in {}", root.display());

        let mut devices = Vec::new();
        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read {}: {}", root.display(), e);
                return Self { devices };
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = super::sysfs::read_attribute(&path.join("name")) else {
                continue;
            };
            let channels = list_channels(&path);
            info!("  {} = {} ({} channels)", path.display(), name, channels.len());
            devices.push(HwmonDevice {
                name: name.trim().to_string(),
                path,
                channels,
            });
        }

        // read_dir order is unspecified; keep output and lookups stable
        devices.sort_by(|a, b| a.path.cmp(&b.path));
        info!("hwmon discovery complete: {} devices found", devices.len());
        Self { devices }
    }

    pub fn devices(&self) -> &[HwmonDevice] {
        &self.devices
    }

    /// Find the first device with the given name
    pub fn find(&self, name: &str) -> Option<&HwmonDevice> {
        self.devices.iter().find(|device| device.name == name)
    }

    /// Turn a configured sensor into a concrete file path.
    ///
    /// Explicit paths are returned unchanged, even if they do not exist yet;
    /// named sensors resolve to `None` when no device has that name.
    pub fn resolve(&self, sensor: &SensorPath) -> Option<PathBuf> {
        match sensor {
            SensorPath::Path { path } => Some(path.clone()),
            SensorPath::Hwmon { hwmon, file } => match self.find(hwmon) {
                Some(device) => {
                    let path = device.path.join(file);
                    debug!("Resolved {}/{} to {}", hwmon, file, path.display());
                    Some(path)
                }
                None => {
                    warn!("No hwmon device named {:?}, {} will show as unavailable", hwmon, file);
                    None
                }
            },
        }
    }
}

/// Temperature and fan input files of one hwmon device, sorted
fn list_channels(device: &Path) -> Vec<String> {
    let mut channels: Vec<String> = std::fs::read_dir(device)
        .map(|files| {
            files
                .flatten()
                .map(|file| file.file_name().to_string_lossy().into_owned())
                .filter(|name| {
                    (name.starts_with("temp") || name.starts_with("fan")) && name.ends_with("_input")
                })
                .collect()
        })
        .unwrap_or_default();
    channels.sort();
    channels
}

/// Power supplies (batteries and adapters) under `root`, sorted by name
pub fn list_power_supplies(root: &Path) -> Vec<(String, PathBuf)> {
    let mut supplies: Vec<(String, PathBuf)> = std::fs::read_dir(root)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
                .collect()
        })
        .unwrap_or_default();
    supplies.sort();
    supplies
}

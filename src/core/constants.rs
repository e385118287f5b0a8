//! Shared constants for the application

/// Bytes in one mebibyte
pub const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Mebibytes in one gibibyte. Memory readings switch to GiB above this.
pub const MIB_PER_GIB: u64 = 1024;

/// Largest interval or delay magnitude a block may be configured with, in
/// seconds (ten years)
pub const MAX_SCHEDULE_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Number of wattage samples averaged by the power reader
pub const POWER_HISTORY_LEN: usize = 5;

/// Longest line read from a sysfs attribute
pub const MAX_ATTRIBUTE_LEN: u64 = 512;

/// Placeholder text shown when a value cannot be read (nf-fa-warning)
pub const UNAVAILABLE_TEXT: &str = "\u{f071} ";

/// Icon shown when a reader has nothing better to show (nf-fa-warning)
pub const UNAVAILABLE_ICON: &str = "\u{f071}";

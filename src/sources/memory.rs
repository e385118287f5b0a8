//! Memory (RAM) reader

use crate::core::constants::{BYTES_PER_MIB, MIB_PER_GIB, UNAVAILABLE_TEXT};
use crate::core::{ReaderMetadata, SampleReader};
use rg_status_types::{Color, Sample};
use sysinfo::System;

const MEMORY_COLOR: Color = Color::from_hex_const("#b48ead");

/// nf-md-memory
const MEMORY_ICON: &str = "\u{f85a}";

/// Raw memory counters, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    pub total: u64,
    pub free: u64,
    pub swap_total: u64,
    pub swap_free: u64,
}

impl MemoryStats {
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.free)
    }

    pub fn swap_used(&self) -> u64 {
        self.swap_total.saturating_sub(self.swap_free)
    }
}

/// Human-readable size: whole MiB up to 1024 MiB, GiB with one decimal above
pub fn format_size(bytes: u64) -> String {
    let mib = bytes / BYTES_PER_MIB;
    if mib > MIB_PER_GIB {
        format!("{:.1}GiB", mib as f64 / MIB_PER_GIB as f64)
    } else {
        format!("{}MiB", mib)
    }
}

/// Sample for a memory snapshot. Swap is only mentioned while in use.
pub fn memory_sample(stats: &MemoryStats) -> Sample {
    if stats.total == 0 {
        return Sample::new(MEMORY_ICON, UNAVAILABLE_TEXT, MEMORY_COLOR);
    }

    let mut text = format_size(stats.used());
    let swap_used = stats.swap_used();
    if swap_used > 0 {
        text.push_str(&format!(" +{} swap", format_size(swap_used)));
    }

    Sample::new(MEMORY_ICON, text, MEMORY_COLOR)
}

/// Memory reader
///
/// Owns its own sysinfo::System and only ever refreshes memory counters.
pub struct MemoryReader {
    metadata: ReaderMetadata,
    system: System,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self {
            metadata: ReaderMetadata {
                id: "memory",
                name: "Memory (RAM)",
                description: "Used RAM, plus swap when swapping",
            },
            system: System::new(),
        }
    }
}

impl Default for MemoryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleReader for MemoryReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Sample {
        self.system.refresh_memory();

        let stats = MemoryStats {
            total: self.system.total_memory(),
            free: self.system.free_memory(),
            swap_total: self.system.total_swap(),
            swap_free: self.system.free_swap(),
        };
        memory_sample(&stats)
    }
}

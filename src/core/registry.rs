//! Block registry: the immutable, ordered table of blocks

use super::sample_reader::BoxedSampleReader;
use crate::config::{AppConfig, ConfigError};
use crate::sources::{self, SensorDiscovery};
use log::info;

/// A sample reader bound to its schedule
pub struct BlockDescriptor {
    pub reader: BoxedSampleReader,
    /// Seconds between runs, always positive
    pub interval: i64,
    /// Epoch the run times are aligned to, if any
    pub align: Option<i64>,
    /// Seconds to wait before the first run. `-1` on an aligned block means
    /// "run once right away, then follow the aligned cadence".
    pub delay: i64,
}

impl BlockDescriptor {
    pub fn new(reader: BoxedSampleReader, interval: i64, align: Option<i64>, delay: i64) -> Self {
        Self {
            reader,
            interval,
            align,
            delay,
        }
    }
}

/// Ordered list of blocks, fixed once built
pub struct BlockRegistry {
    blocks: Vec<BlockDescriptor>,
}

impl BlockRegistry {
    /// Build a registry, rejecting non-positive intervals and empty tables
    pub fn new(blocks: Vec<BlockDescriptor>) -> Result<Self, ConfigError> {
        if blocks.is_empty() {
            return Err(ConfigError::NoBlocks);
        }
        for (index, block) in blocks.iter().enumerate() {
            if block.interval <= 0 {
                return Err(ConfigError::InvalidInterval {
                    index,
                    source_type: block.reader.metadata().id.to_string(),
                    interval: block.interval,
                });
            }
        }
        Ok(Self { blocks })
    }

    /// Create every configured reader, resolving sensor paths through `discovery`
    pub fn from_config(config: &AppConfig, discovery: &SensorDiscovery) -> Result<Self, ConfigError> {
        config.validate()?;

        let blocks = config
            .blocks
            .iter()
            .map(|block| {
                let reader = sources::create_reader(&block.source, discovery);
                info!(
                    "Block {}: interval={}s align={} delay={}",
                    reader.metadata().id,
                    block.interval,
                    block.align,
                    block.delay
                );
                let align = (block.align != 0).then_some(block.align);
                BlockDescriptor::new(reader, block.interval, align, block.delay)
            })
            .collect();

        Self::new(blocks)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BlockDescriptor> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockDescriptor> {
        self.blocks.iter()
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut [BlockDescriptor] {
        &mut self.blocks
    }
}

//! Sample reader trait and related types

use rg_status_types::Sample;

/// Metadata about a sample reader
#[derive(Debug, Clone)]
pub struct ReaderMetadata {
    /// Unique identifier for this reader type (matches the config `source_type`)
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Description of what this reader shows
    pub description: &'static str,
}

/// Trait for all sample readers
///
/// A reader turns the current state of one external source (a sysfs file, the
/// mixer, the clock) into a [`Sample`]. Reading is infallible: a missing
/// device, an unreadable file or unparsable content is reported as the
/// reader's designated "unavailable" sample so it shows up in the status line
/// itself.
pub trait SampleReader {
    /// Get metadata about this reader
    fn metadata(&self) -> &ReaderMetadata;

    /// Produce a fresh sample
    ///
    /// Called by the scheduler each time the block is due. Must only perform
    /// short, bounded reads.
    fn read(&mut self) -> Sample;
}

/// Type-erased sample reader for dynamic dispatch
pub type BoxedSampleReader = Box<dyn SampleReader>;

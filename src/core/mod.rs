//! Core traits and types for rg-status

pub mod constants;
mod formatter;
mod publisher;
mod registry;
mod sample_reader;
mod scheduler;

pub use formatter::{format_fragment, Markup};
pub use publisher::{Publisher, PublisherKind, StdoutPublisher, XSetRootPublisher};
pub use registry::{BlockDescriptor, BlockRegistry};
pub use sample_reader::{BoxedSampleReader, ReaderMetadata, SampleReader};
pub use scheduler::{now, Scheduler, Timestamp};

//! Memory source configuration types.

use serde::{Deserialize, Serialize};

/// Memory source configuration. RAM and swap are always both considered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MemorySourceConfig {}

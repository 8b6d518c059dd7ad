//! Dataset file handling for DecTree.
//!
//! The binary format is a native-endian `u32` item count followed by one
//! record per item: a label byte then `NUM_PIXELS` pixel bytes.

pub mod loader;
pub mod synthetic;
pub mod writer;

// Re-export main components
pub use loader::{load_dataset, read_dataset};
pub use synthetic::{generate, SyntheticConfig};
pub use writer::{save_dataset, write_dataset};

/// Size in bytes of the item-count header.
pub const HEADER_BYTES: usize = 4;

/// Size in bytes of one record (label + pixels).
pub const RECORD_BYTES: usize = 1 + dectree_core::NUM_PIXELS;

//! In-memory adapters.
//!
//! Implementations of the `DatasetSource` port that don't touch the filesystem:
//!
//! - `in_memory_source` - Fixed rows, optionally forced to fail

mod in_memory_source;

pub use in_memory_source::InMemoryDatasetSource;

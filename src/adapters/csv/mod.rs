//! CSV adapters.
//!
//! - `source` - Reads the exploded survey export into `ResponseRow`s

mod source;

pub use source::CsvDatasetSource;

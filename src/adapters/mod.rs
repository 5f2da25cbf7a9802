//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `csv` - Survey export reader
//! - `memory` - In-memory dataset source

pub mod csv;
pub mod memory;

pub use self::csv::CsvDatasetSource;
pub use memory::InMemoryDatasetSource;

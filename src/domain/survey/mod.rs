//! Survey module - The immutable response table and its vocabulary.
//!
//! # Components
//!
//! - `ResponseRow` - One exploded (respondent, multi-select value) record
//! - `Dataset` - Validated, read-only table shared by every caller
//! - `Dimension` - The groupable columns and their categorical orders
//! - `ResponseFilter` - Explorer sidebar allow-lists
//! - `taxonomy` - Closed answer sets and free-text normalization

mod dataset;
mod dimension;
mod errors;
mod filter;
mod response_row;
pub mod taxonomy;

pub use dataset::Dataset;
pub use dimension::Dimension;
pub use errors::DatasetError;
pub use filter::ResponseFilter;
pub use response_row::{ResponseRow, ResponseRowBuilder};

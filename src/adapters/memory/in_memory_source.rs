//! In-memory dataset source for tests and embedding.
//!
//! # Example
//!
//! ```ignore
//! use survey_game::adapters::memory::InMemoryDatasetSource;
//! use survey_game::domain::survey::ResponseRow;
//! use survey_game::ports::DatasetSource;
//!
//! let source = InMemoryDatasetSource::new(vec![
//!     ResponseRow::builder(1).industry("Tech").build(),
//! ]);
//! let rows = source.load().unwrap();
//! ```

use std::sync::RwLock;

use crate::domain::survey::ResponseRow;
use crate::ports::{DatasetSource, SourceError};

/// Hands out a fixed set of rows.
#[derive(Debug, Default)]
pub struct InMemoryDatasetSource {
    rows: Vec<ResponseRow>,
    /// Message of the IO error to return instead of rows
    force_error: RwLock<Option<String>>,
}

impl InMemoryDatasetSource {
    pub fn new(rows: Vec<ResponseRow>) -> Self {
        Self {
            rows,
            force_error: RwLock::new(None),
        }
    }

    /// Makes every subsequent `load` fail with an IO error.
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut slot) = self.force_error.write() {
            *slot = Some(message.into());
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl DatasetSource for InMemoryDatasetSource {
    fn load(&self) -> Result<Vec<ResponseRow>, SourceError> {
        let forced = self
            .force_error
            .read()
            .ok()
            .and_then(|slot| slot.clone());
        match forced {
            Some(message) => Err(SourceError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                message,
            ))),
            None => Ok(self.rows.clone()),
        }
    }

    fn describe(&self) -> String {
        format!("memory:{} rows", self.rows.len())
    }
}

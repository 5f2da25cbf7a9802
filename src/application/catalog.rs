//! SurveyCatalog - The dataset and question bank built once at startup.
//!
//! Every explorer handler and game session reads from the same immutable
//! `Arc<Dataset>` and `Arc<QuestionBank>`; nothing is cached globally.

use std::sync::Arc;

use tracing::info;

use crate::adapters::CsvDatasetSource;
use crate::config::AppConfig;
use crate::domain::game::GameSession;
use crate::domain::questions::QuestionBank;
use crate::domain::survey::Dataset;
use crate::ports::{DatasetSource, SourceError};

/// Shared, read-only survey state.
#[derive(Debug, Clone)]
pub struct SurveyCatalog {
    dataset: Arc<Dataset>,
    bank: Arc<QuestionBank>,
    seed: u64,
}

impl SurveyCatalog {
    /// Loads rows from `source`, validates them and builds the question bank.
    pub fn load(source: &dyn DatasetSource, seed: u64) -> Result<Self, SourceError> {
        let rows = source.load()?;
        let dataset = Dataset::new(rows)?;
        info!(
            source = %source.describe(),
            rows = dataset.row_count(),
            respondents = dataset.respondent_count(),
            "Survey dataset loaded"
        );
        Ok(Self::from_dataset(dataset, seed))
    }

    /// Loads the CSV named by `config.dataset.path` with the configured seed.
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        let source = CsvDatasetSource::new(config.dataset.path.clone());
        Self::load(&source, config.game.shuffle_seed)
    }

    pub fn from_dataset(dataset: Dataset, seed: u64) -> Self {
        let bank = QuestionBank::build(&dataset);
        Self {
            dataset: Arc::new(dataset),
            bank: Arc::new(bank),
            seed,
        }
    }

    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A fresh player session in the menu, seeded from the catalog.
    pub fn new_session(&self) -> GameSession {
        GameSession::new(self.seed)
    }
}

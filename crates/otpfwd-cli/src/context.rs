//! Shared state for command execution.

use crate::config::Config;
use crate::error::Result;
use otpfwd_extractor::Pipeline;
use otpfwd_gatekeeper::SpamGate;
use otpfwd_store::{CountryTable, LoadOutcome};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Country table and pipeline, built once per process.
#[derive(Debug, Clone)]
pub struct AppContext {
    pipeline: Arc<Pipeline<CountryTable>>,
    table_path: PathBuf,
    table_outcome: LoadOutcome,
}

impl AppContext {
    /// Load (or create) the country table and build the pipeline.
    ///
    /// `countries` overrides the table path from the configuration.
    pub fn build(config: &Config, countries: Option<&Path>) -> Result<Self> {
        let table_path = countries
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.country_table.clone());
        let (table, table_outcome) = CountryTable::load_or_init_with_outcome(&table_path)?;

        let gate = SpamGate::new(&config.gate);
        let pipeline = Pipeline::new(table, gate, config.extractor.clone())?;

        Ok(Self {
            pipeline: Arc::new(pipeline),
            table_path,
            table_outcome,
        })
    }

    /// The shared pipeline.
    pub fn pipeline(&self) -> &Arc<Pipeline<CountryTable>> {
        &self.pipeline
    }

    /// The country table in use.
    pub fn table(&self) -> &CountryTable {
        self.pipeline.directory()
    }

    /// Where the country table lives.
    pub fn table_path(&self) -> &Path {
        &self.table_path
    }

    /// How the country table was obtained.
    pub fn table_outcome(&self) -> LoadOutcome {
        self.table_outcome
    }
}

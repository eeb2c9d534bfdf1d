// crates/infra/src/persistence/csv_source.rs
use std::path::{Path, PathBuf};

use exposure_rollup_ports::sources::{ExposureSource, FactRowDto, TierRecordDto, TierSource};
use exposure_rollup_shared_kernel::Result;
use serde::de::DeserializeOwned;

use super::map_csv_error;

/// Reads the exposure dataset from a headered CSV file.
pub struct CsvExposureSource {
    path: PathBuf,
}

impl CsvExposureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExposureSource for CsvExposureSource {
    fn load(&self) -> Result<Vec<FactRowDto>> {
        read_records(&self.path)
    }
}

/// Reads the counterparty tier dataset from a headered CSV file.
pub struct CsvTierSource {
    path: PathBuf,
}

impl CsvTierSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TierSource for CsvTierSource {
    fn load(&self) -> Result<Vec<TierRecordDto>> {
        read_records(&self.path)
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| map_csv_error(path, e))?;

    reader
        .deserialize()
        .map(|record| record.map_err(|e| map_csv_error(path, e)))
        .collect()
}

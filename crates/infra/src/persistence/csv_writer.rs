// crates/infra/src/persistence/csv_writer.rs
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use exposure_rollup_ports::sink::{ResultRowDto, ResultSetDto, ResultSink};
use exposure_rollup_shared_kernel::{InfrastructureError, Result};

use super::map_csv_error;

/// Persists each result set as `<dir>/<name>.csv` with the canonical
/// header row derived from the row DTO.
pub struct CsvResultWriter {
    out_dir: PathBuf,
}

impl CsvResultWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    pub fn target_path(&self, set: &ResultSetDto) -> PathBuf {
        self.out_dir.join(format!("{}.csv", set.name))
    }

    fn create(&self, path: &Path) -> Result<BufWriter<File>> {
        fs::create_dir_all(&self.out_dir).map_err(|source| InfrastructureError::FileWrite {
            path: self.out_dir.clone(),
            source,
        })?;
        let file = File::create(path).map_err(|source| InfrastructureError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufWriter::new(file))
    }
}

impl ResultSink for CsvResultWriter {
    fn write(&self, set: &ResultSetDto) -> Result<()> {
        let path = self.target_path(set);
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(self.create(&path)?);

        // Header goes out even for an empty result set.
        writer
            .write_record(ResultRowDto::HEADER)
            .map_err(|e| map_csv_error(&path, e))?;
        for row in &set.rows {
            writer.serialize(row).map_err(|e| map_csv_error(&path, e))?;
        }
        writer
            .flush()
            .map_err(|source| InfrastructureError::FileWrite { path, source }.into())
    }
}

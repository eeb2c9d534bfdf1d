pub mod csv_source;
pub mod csv_writer;

pub use csv_source::{CsvExposureSource, CsvTierSource};
pub use csv_writer::CsvResultWriter;

use std::path::Path;

use exposure_rollup_shared_kernel::{ExposureRollupError, InfrastructureError};

/// Split a csv error into the I/O and parse cases, attaching the file path
/// the csv crate does not carry itself.
pub(crate) fn map_csv_error(path: &Path, err: csv::Error) -> ExposureRollupError {
    let details = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => {
            InfrastructureError::FileRead { path: path.to_path_buf(), source }.into()
        }
        _ => InfrastructureError::Csv { path: path.to_path_buf(), details }.into(),
    }
}

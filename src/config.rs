use std::path::PathBuf;

use exposure_rollup_domain::options::OutputFormat;
use exposure_rollup_shared_kernel::{PresentationError, PresentationResult};

use crate::cli;

/// Resolved run configuration derived from the CLI arguments.
#[derive(Debug)]
pub struct Config {
    pub facts: PathBuf,
    pub tiers: PathBuf,
    pub format: OutputFormat,
    pub out_dir: PathBuf,
    pub jobs: usize,
}

impl Config {
    pub fn from_args(args: cli::Args) -> PresentationResult<Self> {
        let jobs = match args.jobs {
            Some(0) => {
                return Err(PresentationError::InvalidValue {
                    flag: "--jobs".to_string(),
                    value: "0".to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            Some(n) => n,
            None => num_cpus::get(),
        };

        let format = match args.format {
            cli::OutputFormat::Csv => OutputFormat::Csv,
            cli::OutputFormat::Table => OutputFormat::Table,
            cli::OutputFormat::Json => OutputFormat::Json,
        };

        Ok(Self {
            facts: args.facts,
            tiers: args.tiers,
            format,
            out_dir: args.out_dir,
            jobs,
        })
    }
}

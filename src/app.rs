use anyhow::{Context, Result};
use clap::Parser;
use exposure_rollup_domain::config::RollupPlan;
use exposure_rollup_infra::{CsvExposureSource, CsvTierSource};
use exposure_rollup_usecase::{RunDiagnostics, RunRollup};

use crate::{cli, config::Config, output};

pub fn run() -> Result<()> {
    let args = cli::Args::parse();
    let config = Config::from_args(args)?;

    let facts = CsvExposureSource::new(&config.facts);
    let tiers = CsvTierSource::new(&config.tiers);
    let usecase = RunRollup::new(&facts, &tiers);

    let run_output = usecase
        .run(&RollupPlan::standard(), config.jobs)
        .context("rollup run failed")?;

    report_diagnostics(&run_output.diagnostics);
    output::emit(&run_output, &config).context("failed to emit output")
}

fn report_diagnostics(diagnostics: &RunDiagnostics) {
    if diagnostics.join_misses > 0 {
        eprintln!(
            "[warn] {} exposure row(s) had no matching tier record and were dropped",
            diagnostics.join_misses
        );
    }
    if !diagnostics.ambiguous_keys.is_empty() {
        eprintln!(
            "[warn] multiple tier records for counterparties: {}; first record kept",
            diagnostics.ambiguous_keys.join(", ")
        );
    }
}

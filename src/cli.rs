use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "exposure_rollup",
    version,
    about = "Joins counterparty exposures with tier data and rolls the aggregates up across grouping grains"
)]
pub struct Args {
    /// Exposure dataset (CSV with header legal_entity,counter_party,status,value)
    #[arg(long)]
    pub facts: PathBuf,

    /// Counterparty tier dataset (CSV with header counter_party,rating,tier)
    #[arg(long)]
    pub tiers: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Directory the CSV result sets are written to
    #[arg(long, default_value = "output")]
    pub out_dir: PathBuf,

    /// Worker threads for the aggregation stages
    #[arg(long)]
    pub jobs: Option<usize>,
}

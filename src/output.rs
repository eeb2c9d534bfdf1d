use exposure_rollup_domain::options::OutputFormat;
use exposure_rollup_infra::CsvResultWriter;
use exposure_rollup_ports::sink::{ResultRowDto, ResultSink};
use exposure_rollup_shared_kernel::ApplicationError;
use exposure_rollup_usecase::RollupRunOutput;

use crate::config::Config;

pub fn emit(output: &RollupRunOutput, config: &Config) -> anyhow::Result<()> {
    match config.format {
        OutputFormat::Csv => write_csv(output, config)?,
        OutputFormat::Json => write_json(output)?,
        OutputFormat::Table => render_table(output),
    }
    Ok(())
}

fn write_csv(output: &RollupRunOutput, config: &Config) -> anyhow::Result<()> {
    let sink = CsvResultWriter::new(&config.out_dir);
    for set in &output.sets {
        sink.write(set).map_err(|e| ApplicationError::OutputFailed {
            name: set.name.clone(),
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        eprintln!("wrote {}", sink.target_path(set).display());
    }
    Ok(())
}

fn write_json(output: &RollupRunOutput) -> anyhow::Result<()> {
    let diagnostics = &output.diagnostics;
    let document = serde_json::json!({
        "result_sets": output.sets,
        "summary": {
            "facts_read": diagnostics.facts_read,
            "tiers_read": diagnostics.tiers_read,
            "records_joined": diagnostics.records_joined,
            "join_misses": diagnostics.join_misses,
            "ambiguous_keys": diagnostics.ambiguous_keys,
        },
    });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn render_table(output: &RollupRunOutput) {
    for set in &output.sets {
        println!("[{}]", set.name);
        print_table_row(ResultRowDto::HEADER.map(str::to_string));
        for row in &set.rows {
            print_table_row([
                row.legal_entity.clone(),
                row.counterparty.clone(),
                row.tier.clone(),
                row.max_rating.to_string(),
                row.sum_arap.to_string(),
                row.sum_accr.to_string(),
            ]);
        }
        println!("---");
    }
}

fn print_table_row(cells: [String; 6]) {
    println!(
        "{:<14}\t{:<14}\t{:>6}\t{:>28}\t{:>28}\t{:>28}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    );
}

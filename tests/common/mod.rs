//! Shared fixtures for the integration suites.

use std::{fs, path::Path};

/// The worked example from the project brief: three exposures across two
/// counterparties, both present in the tier dataset.
#[allow(dead_code)]
pub fn write_scenario_fixtures(dir: &Path) {
    fs::write(
        dir.join("facts.csv"),
        "legal_entity,counter_party,status,value\n\
         LE1,CP1,ARAP,100\n\
         LE1,CP1,ACCR,50\n\
         LE2,CP2,ARAP,30\n",
    )
    .unwrap();
    fs::write(
        dir.join("tiers.csv"),
        "counter_party,rating,tier\n\
         CP1,7,1\n\
         CP2,3,2\n",
    )
    .unwrap();
}

/// Read a written result set back as raw rows (header included).
#[allow(dead_code)]
pub fn read_csv_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(path).unwrap();
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

use std::fs;

use assert_cmd::Command;

#[path = "../common/mod.rs"]
mod common;

fn run_rollup(dir: &std::path::Path) -> assert_cmd::assert::Assert {
    Command::new(env!("CARGO_BIN_EXE_exposure_rollup"))
        .arg("--facts")
        .arg(dir.join("facts.csv"))
        .arg("--tiers")
        .arg(dir.join("tiers.csv"))
        .arg("--out-dir")
        .arg(dir.join("out"))
        .arg("--jobs")
        .arg("2")
        .assert()
}

#[test]
fn finest_grain_matches_worked_example() {
    let temp = tempfile::tempdir().unwrap();
    common::write_scenario_fixtures(temp.path());

    run_rollup(temp.path()).success();

    let rows = common::read_csv_rows(&temp.path().join("out/by_entity_counterparty_tier.csv"));
    assert_eq!(
        rows[0],
        vec![
            "legal_entity",
            "counterparty",
            "tier",
            "max(rating by counterparty)",
            "sum(value where status=ARAP)",
            "sum(value where status=ACCR)",
        ]
    );
    assert_eq!(rows[1], vec!["LE1", "CP1", "1", "7", "100", "50"]);
    assert_eq!(rows[2], vec!["LE2", "CP2", "2", "3", "30", "0"]);
    assert_eq!(rows.len(), 3);
}

#[test]
fn rollup_totals_cover_every_coarser_grain() {
    let temp = tempfile::tempdir().unwrap();
    common::write_scenario_fixtures(temp.path());

    run_rollup(temp.path()).success();

    let rows = common::read_csv_rows(&temp.path().join("out/rollup_totals.csv"));
    let data = &rows[1..];
    assert_eq!(data.len(), 8);

    // by_entity
    assert_eq!(data[0], vec!["LE1", "Total", "Total", "7", "100", "50"]);
    assert_eq!(data[1], vec!["LE2", "Total", "Total", "3", "30", "0"]);
    // by_entity_counterparty
    assert_eq!(data[2], vec!["LE1", "CP1", "Total", "7", "100", "50"]);
    assert_eq!(data[3], vec!["LE2", "CP2", "Total", "3", "30", "0"]);
    // by_counterparty
    assert_eq!(data[4], vec!["Total", "CP1", "Total", "7", "100", "50"]);
    assert_eq!(data[5], vec!["Total", "CP2", "Total", "3", "30", "0"]);
    // by_tier
    assert_eq!(data[6], vec!["Total", "Total", "1", "7", "100", "50"]);
    assert_eq!(data[7], vec!["Total", "Total", "2", "3", "30", "0"]);
}

#[test]
fn repeated_runs_emit_identical_files() {
    let temp = tempfile::tempdir().unwrap();
    common::write_scenario_fixtures(temp.path());

    run_rollup(temp.path()).success();
    let first_finest = fs::read(temp.path().join("out/by_entity_counterparty_tier.csv")).unwrap();
    let first_totals = fs::read(temp.path().join("out/rollup_totals.csv")).unwrap();

    run_rollup(temp.path()).success();
    let second_finest = fs::read(temp.path().join("out/by_entity_counterparty_tier.csv")).unwrap();
    let second_totals = fs::read(temp.path().join("out/rollup_totals.csv")).unwrap();

    assert_eq!(first_finest, second_finest);
    assert_eq!(first_totals, second_totals);
}

#[test]
fn unmatched_counterparty_is_dropped_with_warning() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("facts.csv"),
        "legal_entity,counter_party,status,value\n\
         LE1,CP1,ARAP,100\n\
         LE1,CP9,ARAP,999\n",
    )
    .unwrap();
    fs::write(temp.path().join("tiers.csv"), "counter_party,rating,tier\nCP1,7,1\n").unwrap();

    run_rollup(temp.path())
        .success()
        .stderr(predicates::str::contains("1 exposure row(s) had no matching tier record"));

    let rows = common::read_csv_rows(&temp.path().join("out/by_entity_counterparty_tier.csv"));
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| !row.contains(&"999".to_string())));
}

#[test]
fn duplicate_tier_records_keep_first_and_warn() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("facts.csv"),
        "legal_entity,counter_party,status,value\nLE1,CP1,ARAP,100\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("tiers.csv"),
        "counter_party,rating,tier\nCP1,7,1\nCP1,2,9\n",
    )
    .unwrap();

    run_rollup(temp.path())
        .success()
        .stderr(predicates::str::contains("multiple tier records for counterparties: CP1"));

    let rows = common::read_csv_rows(&temp.path().join("out/by_entity_counterparty_tier.csv"));
    assert_eq!(rows[1], vec!["LE1", "CP1", "1", "7", "100", "0"]);
}

#[test]
fn empty_facts_produce_headers_only() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("facts.csv"), "legal_entity,counter_party,status,value\n").unwrap();
    fs::write(temp.path().join("tiers.csv"), "counter_party,rating,tier\nCP1,7,1\n").unwrap();

    run_rollup(temp.path()).success();

    let finest = common::read_csv_rows(&temp.path().join("out/by_entity_counterparty_tier.csv"));
    let totals = common::read_csv_rows(&temp.path().join("out/rollup_totals.csv"));
    assert_eq!(finest.len(), 1);
    assert_eq!(totals.len(), 1);
}

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;

fn command(temp: &std::path::Path, format: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_exposure_rollup"));
    cmd.arg("--facts")
        .arg(temp.join("facts.csv"))
        .arg("--tiers")
        .arg(temp.join("tiers.csv"))
        .arg("--out-dir")
        .arg(temp.join("out"))
        .arg("--format")
        .arg(format);
    cmd
}

#[test]
fn json_output_carries_result_sets_and_summary() {
    let temp = tempfile::tempdir().unwrap();
    common::write_scenario_fixtures(temp.path());

    let assert = command(temp.path(), "json").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let document: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    let sets = document["result_sets"].as_array().unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0]["name"], "by_entity_counterparty_tier");
    assert_eq!(sets[1]["name"], "rollup_totals");

    let first_row = &sets[0]["rows"][0];
    assert_eq!(first_row["legal_entity"], "LE1");
    assert_eq!(first_row["max(rating by counterparty)"], 7);
    assert_eq!(first_row["sum(value where status=ARAP)"], 100);

    assert_eq!(document["summary"]["records_joined"], 3);
    assert_eq!(document["summary"]["join_misses"], 0);
}

#[test]
fn table_output_renders_named_sections() {
    let temp = tempfile::tempdir().unwrap();
    common::write_scenario_fixtures(temp.path());

    command(temp.path(), "table")
        .assert()
        .success()
        .stdout(predicate::str::contains("[by_entity_counterparty_tier]"))
        .stdout(predicate::str::contains("[rollup_totals]"))
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn csv_is_the_default_format() {
    let temp = tempfile::tempdir().unwrap();
    common::write_scenario_fixtures(temp.path());

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_exposure_rollup"));
    cmd.arg("--facts")
        .arg(temp.path().join("facts.csv"))
        .arg("--tiers")
        .arg(temp.path().join("tiers.csv"))
        .arg("--out-dir")
        .arg(temp.path().join("out"));

    cmd.assert().success();
    assert!(temp.path().join("out/by_entity_counterparty_tier.csv").exists());
    assert!(temp.path().join("out/rollup_totals.csv").exists());
}

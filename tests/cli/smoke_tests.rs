use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_exposure_rollup"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exposure_rollup"));
}

#[test]
fn missing_facts_file_fails_with_read_error() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("tiers.csv"), "counter_party,rating,tier\n").unwrap();

    Command::new(env!("CARGO_BIN_EXE_exposure_rollup"))
        .arg("--facts")
        .arg(temp.path().join("nope.csv"))
        .arg("--tiers")
        .arg(temp.path().join("tiers.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn rejects_zero_jobs() {
    Command::new(env!("CARGO_BIN_EXE_exposure_rollup"))
        .args(["--facts", "facts.csv", "--tiers", "tiers.csv", "--jobs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
}

#[test]
fn requires_both_datasets() {
    Command::new(env!("CARGO_BIN_EXE_exposure_rollup"))
        .args(["--facts", "facts.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--tiers"));
}

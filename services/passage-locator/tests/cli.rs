use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn found_passage_is_printed_as_json() {
    let output = cargo_bin_cmd!("passage-locator")
        .arg(fixture("contract.json"))
        .arg("Net 30 days")
        .arg("2")
        .env("LOCATOR_SETTLE_DELAY_MS", "0")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("stdout should contain valid json");
    assert_eq!(value["found"]["page_number"], 2);
    assert_eq!(value["found"]["fragment_start_index"], 1);
    assert_eq!(value["found"]["match_kind"], "exact");
}

#[test]
fn missing_passage_exits_with_failure() {
    cargo_bin_cmd!("passage-locator")
        .arg(fixture("contract.json"))
        .arg("this exact phrase does not exist anywhere")
        .env("LOCATOR_SETTLE_DELAY_MS", "0")
        .assert()
        .failure()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn help_is_printed_instead_of_parsing_a_page() {
    cargo_bin_cmd!("passage-locator")
        .arg(fixture("contract.json"))
        .arg("Net")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("HINT_PAGE"));
}

#[test]
fn zero_hint_page_is_rejected() {
    cargo_bin_cmd!("passage-locator")
        .arg(fixture("contract.json"))
        .arg("Net")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HINT_PAGE"));
}

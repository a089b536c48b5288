//! End-to-end tests for the `tripbudget` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Command for the binary with settings isolated from the caller's environment.
#[allow(deprecated)]
fn tripbudget() -> Command {
    let mut cmd = Command::cargo_bin("tripbudget").expect("Failed to find tripbudget binary");
    cmd.env_remove("TRIPBUDGET_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create config file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config file");
    file
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("Failed to run tripbudget");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_estimate_prints_three_tiers() {
    tripbudget()
        .args(["estimate", "Goa, India", "--days", "5", "--travelers", "2 People"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goa, India for 5 days, 2 travelers"))
        .stdout(predicate::str::contains("$850"))
        .stdout(predicate::str::contains("$1900 (recommended)"))
        .stdout(predicate::str::contains("$4500"));
}

#[test]
fn test_estimate_json() {
    let value = json_output(tripbudget().args([
        "estimate", "Goa", "--days", "5", "--travelers", "Couple", "--json",
    ]));
    assert_eq!(value["economy"], 850);
    assert_eq!(value["standard"], 1900);
    assert_eq!(value["premium"], 4500);
}

#[test]
fn test_breakdown_json() {
    let value = json_output(tripbudget().args(["--json", "breakdown", "1000"]));
    assert_eq!(value["lodging"], 350);
    assert_eq!(value["food"], 250);
    assert_eq!(value["activities"], 200);
    assert_eq!(value["transport"], 150);
    assert_eq!(value["incidentals"], 50);
}

#[test]
fn test_validate_reports_shortfall_and_suggestions() {
    tripbudget()
        .args([
            "validate", "Goa, India", "--days", "5", "--travelers", "2 People", "--budget", "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$270 short of the $370 minimum"))
        .stdout(predicate::str::contains("Try 1 days instead"))
        .stdout(predicate::str::contains("Consider Pondicherry, Rishikesh, or Hampi"))
        .stdout(predicate::str::contains("Add $270 for comfortable trip"));
}

#[test]
fn test_validate_json_field_names() {
    let value = json_output(tripbudget().args([
        "validate", "Goa", "--days", "5", "--travelers", "2 People", "--budget", "400", "--json",
    ]));
    assert_eq!(value["isValid"], true);
    assert_eq!(value["minimumRequired"], 370);
    assert_eq!(value["currentBudget"], 400);
    assert_eq!(value["shortfall"], 0);
    assert_eq!(value["suggestions"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_validate_accepts_negative_budget() {
    let value = json_output(tripbudget().args([
        "validate", "Goa", "--days", "5", "--travelers", "2 People", "--budget", "-50", "--json",
    ]));
    assert_eq!(value["isValid"], false);
    assert_eq!(value["shortfall"], 420);
}

#[test]
fn test_validate_treats_non_ascii_digits_as_zero() {
    let value = json_output(tripbudget().args([
        "validate", "Goa", "--days", "5", "--travelers", "2 People", "--budget", "٣٠٠", "--json",
    ]));
    assert_eq!(value["currentBudget"], 0);
    assert_eq!(value["isValid"], false);
    assert_eq!(value["shortfall"], 370);
}

#[test]
fn test_report_defaults_to_recommended_tier() {
    tripbudget()
        .args(["report", "Goa", "--days", "5", "--travelers", "2 People"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected $1900 ($190 per person per day)"))
        .stdout(predicate::str::contains("Budget looks good"));
}

#[test]
fn test_report_rejects_small_custom_amount() {
    tripbudget()
        .args(["report", "Goa", "--days", "5", "--amount", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 50"));
}

#[test]
fn test_report_tier_and_amount_conflict() {
    tripbudget()
        .args(["report", "Goa", "--tier", "economy", "--amount", "500"])
        .assert()
        .failure();
}

#[test]
fn test_parse_estimate_reads_stdin() {
    let value = json_output(
        tripbudget()
            .args(["parse-estimate", "Goa", "--days", "5", "--travelers", "2 People", "--json"])
            .write_stdin("Budget: $500 for backpackers, $1,200 mid-range, $3,000 luxury"),
    );
    assert_eq!(value["isParsed"], true);
    assert_eq!(value["source"], "response");
    assert_eq!(value["estimate"]["standard"], 1200);
}

#[test]
fn test_parse_estimate_falls_back_to_computed() {
    let value = json_output(
        tripbudget()
            .args(["parse-estimate", "Goa", "--days", "5", "--travelers", "2 People", "--json"])
            .write_stdin("Enjoy the beaches!"),
    );
    assert_eq!(value["isParsed"], false);
    assert_eq!(value["source"], "computed");
    assert_eq!(value["estimate"]["economy"], 850);
}

#[test]
fn test_offers_are_reproducible_with_seed() {
    let args = ["offers", "hotels", "Goa", "--tier", "premium", "--seed", "7", "--json"];
    let first = json_output(tripbudget().args(args));
    let second = json_output(tripbudget().args(args));
    assert_eq!(first, second);
    assert_eq!(first["kind"], "hotels");
    assert_eq!(first["offers"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_offers_rejects_unknown_kind() {
    tripbudget()
        .args(["offers", "cruises", "Goa"])
        .assert()
        .failure();
}

#[test]
fn test_tables_dump_defaults() {
    tripbudget()
        .arg("tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("[cost_model.economy]"))
        .stdout(predicate::str::contains("lodging = 35"))
        .stdout(predicate::str::contains("key = \"goa\""));
}

#[test]
fn test_config_file_overrides_registry() {
    let file = config_file(
        r#"
[tables.destinations]
default_min_per_day = 50
"#,
    );

    tripbudget()
        .arg("--config")
        .arg(file.path())
        .args(["validate", "Reykjavik", "--days", "2", "--travelers", "Solo", "--budget", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$100 minimum"));
}

#[test]
fn test_config_path_from_environment() {
    let file = config_file(
        r#"
[[tables.destinations.entries]]
key = "Lisbon"
min_per_day = 70
"#,
    );

    let value = json_output(
        tripbudget()
            .env("TRIPBUDGET_CONFIG", file.path())
            .args(["validate", "Lisbon", "--days", "1", "--budget", "0", "--json"]),
    );
    assert_eq!(value["matchedDestination"], "lisbon");
    assert_eq!(value["minimumRequired"], 70);
}

#[test]
fn test_invalid_config_fails() {
    let file = config_file(
        r#"
[tables.allocation]
lodging = 90
"#,
    );

    tripbudget()
        .arg("--config")
        .arg(file.path())
        .arg("tables")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid reference tables"));
}

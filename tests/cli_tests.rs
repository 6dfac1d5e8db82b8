use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_test_config, sheet, write_config_without_credentials};

#[test]
fn test_report_rejects_wrong_key_arity() {
    let conf = write_config_without_credentials("report_wrong_arity");

    // station-aware config expects three parts
    sheet()
        .args(["--config", &conf, "report", "2025-01-02|A"])
        .assert()
        .failure()
        .stderr(contains("Invalid shift selection"));
}

#[test]
fn test_report_rejects_blank_key_component() {
    let conf = write_config_without_credentials("report_blank_component");

    sheet()
        .args(["--config", &conf, "report", "2025-01-02||LINE 4"])
        .assert()
        .failure()
        .stderr(contains("Invalid shift selection"));
}

#[test]
fn test_report_requires_key_or_latest() {
    let conf = write_config_without_credentials("report_no_key");

    sheet()
        .args(["--config", &conf, "report"])
        .assert()
        .failure()
        .stderr(contains("pass a selection key or --latest"));
}

#[test]
fn test_report_rejects_unparsable_key_date() {
    let conf = write_config_without_credentials("report_bad_date");

    sheet()
        .args(["--config", &conf, "report", "not-a-date|A|LINE 4"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_report_requires_credentials_before_fetching() {
    let conf = write_config_without_credentials("report_no_creds");

    sheet()
        .args(["--config", &conf, "report", "2025-01-02|A|LINE 4"])
        .assert()
        .failure()
        .stderr(contains("Missing API credentials"));
}

#[test]
fn test_shifts_requires_credentials() {
    let conf = write_config_without_credentials("shifts_no_creds");

    sheet()
        .args(["--config", &conf, "shifts"])
        .assert()
        .failure()
        .stderr(contains("Missing API credentials"));
}

#[test]
fn test_init_writes_default_config() {
    let conf = setup_test_config("init_writes_config");

    sheet()
        .args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&conf).expect("read written config");
    assert!(content.contains("api_url"));
    assert!(content.contains("shift_starts"));
    assert!(content.contains("station_aware"));
}

#[test]
fn test_config_print_round_trips() {
    let conf = setup_test_config("config_print");

    sheet()
        .args(["--config", &conf, "init"])
        .assert()
        .success();

    sheet()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("lookback_days"))
        .stdout(contains("api.evocon.com"));
}

#[test]
fn test_config_check_flags_missing_credentials() {
    let conf = write_config_without_credentials("config_check");

    sheet()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("No API credentials"));
}

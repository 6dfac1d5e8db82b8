#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use shiftsheet::models::record::ChecklistRecord;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sheet() -> Command {
    let mut cmd = cargo_bin_cmd!("shiftsheet");
    // Keep CLI tests hermetic: never pick up real credentials.
    cmd.env_remove("SHIFTSHEET_TENANT");
    cmd.env_remove("SHIFTSHEET_SECRET");
    cmd
}

/// Create a unique config file path inside the system temp dir and remove any
/// existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftsheet.conf", name));
    let conf_path = path.to_string_lossy().to_string();
    fs::remove_file(&conf_path).ok();
    conf_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file without credentials, pointing at an unroutable API.
pub fn write_config_without_credentials(name: &str) -> String {
    let conf_path = setup_test_config(name);
    fs::write(
        &conf_path,
        "api_url: \"http://127.0.0.1:9/checklists\"\nlookback_days: 3\n",
    )
    .expect("write test config");
    conf_path
}

/// Minimal checklist record for core tests; metadata fields stay empty.
pub fn rec(
    date: &str,
    shift: &str,
    station: &str,
    donetime: &str,
    item: &str,
    result: &str,
) -> ChecklistRecord {
    ChecklistRecord {
        shift_date: date.to_string(),
        shift: shift.to_string(),
        station: station.to_string(),
        donetime: donetime.to_string(),
        itemname: item.to_string(),
        itemresult: result.to_string(),
        ..Default::default()
    }
}

pub fn with_operator(mut r: ChecklistRecord, operator: &str) -> ChecklistRecord {
    r.operator = operator.to_string();
    r
}

pub fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn shift_starts(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

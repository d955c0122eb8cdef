use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{
    VERTICAL_SEALING, corrupt_sqlite_store, directory_store, qcg, setup_test_store, temp_out,
    unreachable_store,
};
use std::path::Path;

fn init_store(store: &str) {
    qcg()
        .args(["--store", store, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_items_lists_checklist() {
    qcg()
        .arg("items")
        .assert()
        .success()
        .stdout(contains(VERTICAL_SEALING))
        .stdout(contains("120-210 °C"));
}

#[test]
fn test_add_then_show_morning_grid() {
    let store = setup_test_store("cli_add_show", "csv");
    init_store(&store);

    qcg()
        .args([
            "--store",
            &store,
            "add",
            "--date",
            "2024-06-01",
            "--time",
            "14:10",
            "--set",
            "2=180",
        ])
        .assert()
        .success()
        .stdout(contains("1 reading(s) saved"))
        .stdout(contains("14:00"));

    qcg()
        .args([
            "--store",
            &store,
            "show",
            "--date",
            "2024-06-01",
            "--shift",
            "morning",
        ])
        .assert()
        .success()
        .stdout(contains("morning shift"))
        .stdout(contains("180"))
        .stdout(contains("20:00").not());
}

#[test]
fn test_show_first_reading_wins_across_sessions() {
    let store = setup_test_store("cli_first_wins", "csv");
    init_store(&store);

    for (at, value) in [("09:05", "111"), ("09:40", "222")] {
        qcg()
            .args([
                "--store", &store, "add", "--date", "2024-01-01", "--time", at, "--set",
                &format!("1={value}"),
            ])
            .assert()
            .success();
    }

    qcg()
        .args(["--store", &store, "show", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("111"))
        .stdout(contains("222").not());
}

#[test]
fn test_show_reports_malformed_rows() {
    let store = setup_test_store("cli_malformed", "csv");
    fs::write(
        &store,
        format!("M1,2024-06-01,not-a-time,{VERTICAL_SEALING},9\nM1,2024-06-01,14:10:00,{VERTICAL_SEALING},180\n"),
    )
    .expect("write sheet");

    qcg()
        .args(["--store", &store, "show", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("180"))
        .stderr(contains("1 malformed row(s) skipped"));
}

#[test]
fn test_show_without_data_is_not_an_error() {
    let store = setup_test_store("cli_no_data", "csv");

    qcg()
        .args(["--store", &store, "show", "--date", "2024-06-01", "--shift", "night"])
        .assert()
        .success()
        .stdout(contains("No data yet"))
        .stdout(contains("19:00"));
}

#[test]
fn test_add_unknown_item_fails() {
    let store = setup_test_store("cli_unknown_item", "csv");
    init_store(&store);

    qcg()
        .args(["--store", &store, "add", "--set", "42=1"])
        .assert()
        .failure()
        .stderr(contains("Checklist item not found"));

    let content = fs::read_to_string(&store).expect("read sheet");
    assert!(content.is_empty());
}

#[test]
fn test_add_invalid_time_fails() {
    let store = setup_test_store("cli_invalid_time", "csv");

    qcg()
        .args(["--store", &store, "add", "--time", "25:99", "--set", "1=40"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_export_csv_grid() {
    let store = setup_test_store("cli_export_csv", "csv");
    init_store(&store);
    let out = temp_out("cli_export_csv", "csv");

    qcg()
        .args([
            "--store", &store, "add", "--date", "2024-06-01", "--time", "20:05", "--set", "3=130",
        ])
        .assert()
        .success();

    qcg()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--date",
            "2024-06-01", "--shift", "night", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("item,target,19:00,20:00,21:00,22:00,23:00,00:00,01:00,02:00,03:00,04:00,05:00,06:00,07:00,08:00")
    );
    assert!(content.contains(",130,"));
    assert_eq!(content.lines().count(), 10);
}

#[test]
fn test_export_json_grid() {
    let store = setup_test_store("cli_export_json", "csv");
    init_store(&store);
    let out = temp_out("cli_export_json", "json");

    qcg()
        .args([
            "--store", &store, "add", "--date", "2024-06-01", "--time", "14:10", "--set", "2=180",
        ])
        .assert()
        .success();

    qcg()
        .args([
            "--store", &store, "export", "--format", "json", "--file", &out, "--date",
            "2024-06-01", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(json["shift"], "morning");
    assert_eq!(json["rows"][1]["values"]["14:00"], "180");
    assert_eq!(json["rows"][1]["values"]["15:00"], "");
}

#[test]
fn test_sqlite_backend_and_internal_log() {
    let store = setup_test_store("cli_sqlite", "sqlite");
    init_store(&store);

    qcg()
        .args([
            "--store", &store, "add", "--machine", "M7", "--date", "2024-06-01", "--time",
            "08:30", "--set", "1=35",
        ])
        .assert()
        .success();

    qcg()
        .args(["--store", &store, "show", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("35"));

    qcg()
        .args(["--store", &store, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("append"))
        .stdout(contains("M7"));
}

fn show_degraded(store: &str) {
    qcg()
        .args(["--store", store, "show", "--date", "2024-06-01"])
        .assert()
        .success()
        .stderr(contains("Store unavailable"))
        .stdout(contains("No data yet"))
        .stdout(contains("08:00"));
}

fn add_degraded(store: &str) {
    qcg()
        .args([
            "--store", store, "add", "--date", "2024-06-01", "--time", "09:15", "--set", "1=44",
        ])
        .assert()
        .success()
        .stderr(contains("Readings kept for this session only"))
        .stdout(contains("44"));
}

#[test]
fn test_csv_store_unreadable_degrades_to_empty_grid() {
    let store = directory_store("cli_csv_dir");

    show_degraded(&store);
    add_degraded(&store);
}

#[test]
fn test_sqlite_store_not_a_database_degrades_to_empty_grid() {
    let store = corrupt_sqlite_store("cli_sqlite_corrupt");

    show_degraded(&store);
    add_degraded(&store);

    // the file is left as it was
    let content = fs::read_to_string(&store).expect("read store");
    assert!(content.starts_with("M1,2024-06-01"));
}

#[test]
fn test_sqlite_store_in_missing_dir() {
    let store = unreachable_store("cli_sqlite_missing", "sqlite");

    // nothing to read yet: no warning, and no database is created
    qcg()
        .args(["--store", &store, "show", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("No data yet"))
        .stderr(contains("Store unavailable").not());
    assert!(!Path::new(&store).exists());

    add_degraded(&store);
}

#[test]
fn test_export_with_unreadable_store_writes_empty_grid() {
    let store = corrupt_sqlite_store("cli_export_corrupt");
    let out = temp_out("cli_export_corrupt", "csv");

    qcg()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--date",
            "2024-06-01",
        ])
        .assert()
        .success()
        .stderr(contains("Store unavailable"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains(VERTICAL_SEALING));
}

#[test]
fn test_piped_grid_has_no_escape_codes() {
    let store = setup_test_store("cli_plain_grid", "csv");

    qcg()
        .args(["--store", &store, "show", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("08:00"))
        .stdout(contains("\u{1b}[").not());
}

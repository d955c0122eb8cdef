#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use qcgrid::models::Reading;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn qcg() -> Command {
    cargo_bin_cmd!("qcgrid")
}

/// Unique store path inside the system temp dir; any previous file is removed.
pub fn setup_test_store(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_qcgrid.{}", name, ext));
    let store = path.to_string_lossy().to_string();
    fs::remove_file(&store).ok();
    store
}

/// Temporary output file path inside tempdir, removed beforehand.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

pub fn reading(date: &str, time: &str, item: &str, value: &str) -> Reading {
    Reading::new("M1", d(date), t(time), item, value)
}

pub fn raw(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

pub const SPEED: &str = "ความเร็วที่ใช้ในการเดินเครื่อง";
pub const VERTICAL_SEALING: &str = "ตรวจสอบอุณหภูมิ Vertical Sealing";
pub const UPPER_INNER: &str = "ตรวจสอบอุณหภูมิ Upper Inner";

/// A path under a directory that does not exist.
pub fn unreachable_store(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_qcgrid_missing_dir", name));
    fs::remove_dir_all(&path).ok();
    path.push(format!("readings.{}", ext));
    path.to_string_lossy().to_string()
}

/// A `.sqlite` path holding plain text instead of a database.
pub fn corrupt_sqlite_store(name: &str) -> String {
    let store = setup_test_store(name, "sqlite");
    fs::write(&store, "M1,2024-06-01,09:05:00,not,a database\n".repeat(20))
        .expect("write corrupt store");
    store
}

/// A directory standing where the csv sheet should be.
pub fn directory_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_qcgrid_dir_store", name));
    fs::create_dir_all(&path).expect("create dir store");
    path.to_string_lossy().to_string()
}

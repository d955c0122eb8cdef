mod common;
use common::{SPEED, VERTICAL_SEALING, d};

use qcgrid::core::daily::DailyRecordTable;
use qcgrid::errors::AppError;
use qcgrid::models::{ChecklistCatalog, DailyTable, HourBucket, Shift};

fn hour(h: u8) -> HourBucket {
    HourBucket::new(h).expect("hour")
}

#[test]
fn test_get_or_create_builds_blank_table() {
    let mut tables = DailyRecordTable::new();
    let table = tables.get_or_create(d("2024-06-01"));

    assert_eq!(table.rows.len(), ChecklistCatalog::items().len());
    for (row, item) in table.rows.iter().zip(ChecklistCatalog::items()) {
        assert_eq!(row.item, item.name);
        assert_eq!(row.target, item.target_range);
        assert_eq!(row.cells.len(), 24);
        assert!(row.cells.values().all(String::is_empty));
    }
}

#[test]
fn test_get_or_create_is_idempotent() {
    let mut tables = DailyRecordTable::new();
    let date = d("2024-06-01");

    tables
        .set_cell(date, hour(9), SPEED, "45")
        .expect("set cell");
    let rows = tables.get_or_create(date).rows.len();
    let again = tables.get_or_create(date);

    assert_eq!(again.rows.len(), rows);
    assert_eq!(again.cell(SPEED, hour(9)), Some("45"));
    assert_eq!(tables.len(), 1);
}

#[test]
fn test_set_cell_last_write_wins() {
    let mut tables = DailyRecordTable::new();
    let date = d("2024-06-01");

    tables.set_cell(date, hour(10), SPEED, "A").expect("first");
    tables.set_cell(date, hour(10), SPEED, "B").expect("second");

    assert_eq!(tables.get_or_create(date).cell(SPEED, hour(10)), Some("B"));
}

#[test]
fn test_set_cell_unknown_item_fails() {
    let mut tables = DailyRecordTable::new();

    let err = tables
        .set_cell(d("2024-06-01"), hour(10), "not an item", "1")
        .unwrap_err();

    assert!(matches!(err, AppError::ItemNotFound(name) if name == "not an item"));
}

#[test]
fn test_get_view_restricts_to_shift_columns() {
    let mut tables = DailyRecordTable::new();
    let date = d("2024-06-01");
    tables
        .set_cell(date, hour(20), VERTICAL_SEALING, "190")
        .expect("set cell");

    let morning = tables.get_view(date, Shift::Morning);
    assert_eq!(morning.hours.len(), 12);
    assert!(morning.hours.iter().all(|h| (8..=19).contains(&h.hour())));
    assert!(morning.is_empty());

    let night = tables.get_view(date, Shift::Night);
    let row = night.row(VERTICAL_SEALING).expect("row");
    assert_eq!(row.cell(hour(20)), "190");
    assert_eq!(night.headers()[..3], ["item", "target", "19:00"]);
}

#[test]
fn test_get_view_tolerates_missing_columns() {
    let date = d("2024-06-01");
    let mut old = DailyTable::blank(date);
    for row in &mut old.rows {
        row.cells.remove(&hour(9));
        row.cells.remove(&hour(10));
    }

    let mut tables = DailyRecordTable::new();
    tables.insert(old);

    let view = tables.get_view(date, Shift::Morning);

    assert_eq!(view.hours.len(), 10);
    assert!(!view.hours.contains(&hour(9)));
    assert!(!view.headers().contains(&"10:00".to_string()));
    assert!(view.rows.iter().all(|r| r.cells.len() == 10));
}

#[test]
fn test_tables_are_kept_per_date() {
    let mut tables = DailyRecordTable::new();
    tables
        .set_cell(d("2024-06-01"), hour(9), SPEED, "40")
        .expect("set cell");
    tables.get_or_create(d("2024-06-02"));

    assert_eq!(tables.len(), 2);
    assert_eq!(
        tables.get_or_create(d("2024-06-02")).cell(SPEED, hour(9)),
        Some("")
    );
}

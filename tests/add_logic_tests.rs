mod common;
use common::{SPEED, VERTICAL_SEALING, d, t};

use qcgrid::core::add::AddLogic;
use qcgrid::errors::AppError;
use qcgrid::models::ChecklistCatalog;

#[test]
fn test_entries_resolve_by_position_and_name() {
    let entries = vec!["1=45".to_string(), format!("{VERTICAL_SEALING}= 180 ")];

    let readings =
        AddLogic::build_readings("M2", d("2024-06-01"), t("14:10"), &entries).expect("build");

    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].item, SPEED);
    assert_eq!(readings[0].value, "45");
    assert_eq!(readings[1].item, VERTICAL_SEALING);
    assert_eq!(readings[1].value, "180");
    assert!(readings.iter().all(|r| r.machine_id == "M2"));
}

#[test]
fn test_entry_without_separator_is_rejected() {
    let err = AddLogic::build_readings("M1", d("2024-06-01"), t("14:10"), &["2".to_string()])
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidEntry(_)));
}

#[test]
fn test_entry_with_unknown_item_is_rejected() {
    for token in ["0=1", "10=1", "nope=1"] {
        let err = AddLogic::build_readings("M1", d("2024-06-01"), t("14:10"), &[token.to_string()])
            .unwrap_err();
        assert!(matches!(err, AppError::ItemNotFound(_)), "{token}");
    }
}

#[test]
fn test_catalog_order_is_stable() {
    let names: Vec<&str> = ChecklistCatalog::items().iter().map(|i| i.name).collect();

    assert_eq!(names.len(), 9);
    assert_eq!(names[0], SPEED);
    assert_eq!(names[1], VERTICAL_SEALING);
    assert_eq!(ChecklistCatalog::resolve("9").map(|i| i.target_range), Some("60-140 °C"));
}

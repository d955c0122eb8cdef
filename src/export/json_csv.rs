// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{GridExport, notify_export_success};
use crate::models::GridView;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(view: &GridView, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&GridExport::from(view))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: header row, then one row per checklist item.
pub(crate) fn export_csv(view: &GridView, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(view.headers())?;
    for row in view.to_table() {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

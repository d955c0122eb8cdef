// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::GridView;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export a grid view.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    pub fn export(view: &GridView, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if view.is_empty() {
            warning(format!(
                "No readings for {} ({} shift), exporting an empty grid.",
                view.date, view.shift
            ));
        }

        match format {
            ExportFormat::Csv => export_csv(view, path)?,
            ExportFormat::Json => export_json(view, path)?,
            ExportFormat::Xlsx => export_xlsx(view, path)?,
        }

        log::info!("exported {} grid to {}", format.as_str(), path.display());
        Ok(())
    }
}

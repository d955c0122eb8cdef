use super::{RawRow, SheetBackend};
use crate::errors::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Header-less CSV file standing in for the spreadsheet worksheet.
pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create an empty sheet file if none exists.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(())
    }

    fn unavailable<E: std::fmt::Display>(&self, e: E) -> AppError {
        AppError::BackendUnavailable(format!("{}: {}", self.path.display(), e))
    }
}

impl SheetBackend for CsvSheet {
    fn append_rows(&mut self, rows: &[RawRow]) -> AppResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(file);

        for row in rows {
            wtr.write_record(row).map_err(|e| self.unavailable(e))?;
        }

        wtr.flush().map_err(|e| self.unavailable(e))?;
        Ok(())
    }

    fn load_all(&mut self) -> AppResult<Vec<RawRow>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.unavailable(e))?;

        // Byte records: a hand-edited sheet with bad UTF-8 still loads,
        // leaving it to the row parser to reject the row.
        let mut out = Vec::new();
        for rec in rdr.byte_records() {
            let rec = rec.map_err(|e| self.unavailable(e))?;
            out.push(
                rec.iter()
                    .map(|f| String::from_utf8_lossy(f).into_owned())
                    .collect(),
            );
        }

        Ok(out)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

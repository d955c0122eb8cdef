//! Durable long-form log and the backends it can live in.
//!
//! The core only sees [`SheetBackend`]: append flat rows, load every row.
//! Connection setup and credentials belong to the backend.

pub mod cache;
pub mod csv_sheet;
pub mod memory;
pub mod reading_store;
pub mod sqlite_sheet;

pub use cache::SheetCache;
pub use csv_sheet::CsvSheet;
pub use memory::MemorySheet;
pub use reading_store::{LoadReport, ReadingStore};
pub use sqlite_sheet::SqliteSheet;

use crate::errors::AppResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One raw sheet row: machine_id, date, time, item, value.
pub type RawRow = Vec<String>;

pub const COLUMNS: [&str; 5] = ["Machine ID", "Date", "Time", "Item", "Value"];

pub trait SheetBackend {
    /// Append rows in order, without a header.
    fn append_rows(&mut self, rows: &[RawRow]) -> AppResult<()>;

    /// Every stored row, in storage order.
    fn load_all(&mut self) -> AppResult<Vec<RawRow>>;

    fn describe(&self) -> String;
}

impl<B: SheetBackend + ?Sized> SheetBackend for Box<B> {
    fn append_rows(&mut self, rows: &[RawRow]) -> AppResult<()> {
        (**self).append_rows(rows)
    }

    fn load_all(&mut self) -> AppResult<Vec<RawRow>> {
        (**self).load_all()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Csv,
    Sqlite,
}

impl BackendKind {
    /// `.sqlite` / `.db` → Sqlite, anything else → Csv.
    pub fn infer(path: &str) -> Self {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("sqlite") || ext.eq_ignore_ascii_case("db") => {
                BackendKind::Sqlite
            }
            _ => BackendKind::Csv,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Csv => "csv",
            BackendKind::Sqlite => "sqlite",
        }
    }
}

/// Backend for a store path. Nothing is touched until the first load or
/// append, so an unreachable store shows up as a load warning.
pub fn open_backend(kind: BackendKind, path: &str) -> Box<dyn SheetBackend> {
    match kind {
        BackendKind::Csv => Box::new(CsvSheet::new(path)),
        BackendKind::Sqlite => Box::new(SqliteSheet::new(path)),
    }
}

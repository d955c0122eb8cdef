use super::{RawRow, SheetBackend};
use crate::errors::{AppError, AppResult};

/// In-process sheet. Can be switched offline to simulate an unreachable
/// backend.
#[derive(Debug, Default)]
pub struct MemorySheet {
    rows: Vec<RawRow>,
    offline: bool,
    loads: usize,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<RawRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Number of successful `load_all` calls.
    pub fn load_count(&self) -> usize {
        self.loads
    }
}

impl SheetBackend for MemorySheet {
    fn append_rows(&mut self, rows: &[RawRow]) -> AppResult<()> {
        if self.offline {
            return Err(AppError::BackendUnavailable("memory sheet is offline".into()));
        }
        self.rows.extend_from_slice(rows);
        Ok(())
    }

    fn load_all(&mut self) -> AppResult<Vec<RawRow>> {
        if self.offline {
            return Err(AppError::BackendUnavailable("memory sheet is offline".into()));
        }
        self.loads += 1;
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

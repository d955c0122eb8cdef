use super::{RawRow, SheetBackend};
use crate::errors::AppResult;
use std::time::{Duration, Instant};

/// Keeps the last full load of a backend for a staleness window.
pub struct SheetCache<B: SheetBackend> {
    backend: B,
    rows: Option<Vec<RawRow>>,
    fetched_at: Option<Instant>,
}

impl<B: SheetBackend> SheetCache<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            rows: None,
            fetched_at: None,
        }
    }

    /// Cached rows if younger than `ttl`, otherwise a fresh load.
    /// A zero `ttl` always reloads. A failed reload keeps nothing.
    pub fn get_or_refresh(&mut self, ttl: Duration) -> AppResult<&[RawRow]> {
        let fresh = self.rows.is_some()
            && matches!(self.fetched_at, Some(at) if at.elapsed() < ttl);

        if !fresh {
            self.invalidate();
            let rows = self.backend.load_all()?;
            log::debug!("loaded {} row(s) from {}", rows.len(), self.backend.describe());
            self.rows = Some(rows);
            self.fetched_at = Some(Instant::now());
        }

        Ok(self.rows.as_deref().unwrap_or(&[]))
    }

    /// Writes through and drops the cached copy, whatever the outcome.
    pub fn append(&mut self, rows: &[RawRow]) -> AppResult<()> {
        let result = self.backend.append_rows(rows);
        self.invalidate();
        result
    }

    pub fn invalidate(&mut self) {
        self.rows = None;
        self.fetched_at = None;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

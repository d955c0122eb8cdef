//! Process-scoped state: the live per-date tables and the reading store.
//!
//! A `Session` is built once per process (or per test) and handed to the
//! commands that need it. Dropping it discards the live tables; the store
//! keeps what was appended.

use crate::config::Config;
use crate::core::daily::DailyRecordTable;
use crate::core::pivot::PivotProjector;
use crate::errors::{AppError, AppResult};
use crate::models::{ChecklistCatalog, GridView, Reading, Shift};
use crate::store::{LoadReport, ReadingStore, SheetBackend, open_backend};
use chrono::NaiveDate;
use std::time::Duration;

pub struct Session<B: SheetBackend = Box<dyn SheetBackend>> {
    tables: DailyRecordTable,
    store: ReadingStore<B>,
}

impl Session {
    pub fn open(cfg: &Config) -> Self {
        let path = cfg.store_path();
        let backend = open_backend(cfg.backend, &path.to_string_lossy());
        Self::with_backend(backend, cfg.cache_ttl())
    }
}

impl<B: SheetBackend> Session<B> {
    pub fn with_backend(backend: B, ttl: Duration) -> Self {
        Self {
            tables: DailyRecordTable::new(),
            store: ReadingStore::new(backend, ttl),
        }
    }

    /// Persist readings, then mirror them into the live tables.
    ///
    /// Unknown items abort before anything is written. A backend failure
    /// is returned as a warning and the live tables are still updated.
    pub fn record(&mut self, readings: &[Reading]) -> AppResult<Option<AppError>> {
        if let Some(r) = readings
            .iter()
            .find(|r| ChecklistCatalog::find(&r.item).is_none())
        {
            return Err(AppError::ItemNotFound(r.item.clone()));
        }

        let warning = match self.store.append(readings) {
            Ok(()) => None,
            Err(e) if e.is_recoverable() => {
                log::warn!("append failed, keeping readings in session only: {}", e);
                Some(e)
            }
            Err(e) => return Err(e),
        };

        for r in readings {
            self.tables.set_cell(r.date, r.bucket(), &r.item, &r.value)?;
        }

        Ok(warning)
    }

    /// What was entered in this session, last edit winning.
    pub fn live_view(&mut self, date: NaiveDate, shift: Shift) -> GridView {
        self.tables.get_view(date, shift)
    }

    /// Rebuilt from the durable log, first reading winning.
    pub fn history_view(&mut self, date: NaiveDate, shift: Shift) -> (GridView, LoadReport) {
        let report = self.store.load();
        let view = PivotProjector::project(&report.readings, date, shift);
        (view, report)
    }

    pub fn store_mut(&mut self) -> &mut ReadingStore<B> {
        &mut self.store
    }
}

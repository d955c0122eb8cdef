//! In-session calendar of per-date wide tables.
//!
//! Tables are created on first access and kept for the lifetime of the
//! owning session. Nothing is ever evicted, so memory grows with the number
//! of distinct dates touched in one session.

use crate::core::calendar::ShiftCalendar;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyTable, GridView, HourBucket, Shift};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct DailyRecordTable {
    tables: BTreeMap<NaiveDate, DailyTable>,
}

impl DailyRecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, date: NaiveDate) -> &mut DailyTable {
        self.tables
            .entry(date)
            .or_insert_with(|| DailyTable::blank(date))
    }

    /// Overwrite one cell. Last write wins; prior values are not kept.
    pub fn set_cell(
        &mut self,
        date: NaiveDate,
        hour: HourBucket,
        item: &str,
        value: &str,
    ) -> AppResult<()> {
        let row = self
            .get_or_create(date)
            .row_mut(item)
            .ok_or_else(|| AppError::ItemNotFound(item.to_string()))?;

        row.cells.insert(hour, value.to_string());
        Ok(())
    }

    pub fn get_view(&mut self, date: NaiveDate, shift: Shift) -> GridView {
        self.get_or_create(date)
            .view(shift, &ShiftCalendar::hours_of(shift))
    }

    /// Insert a table built elsewhere (e.g. restored from an older schema).
    pub fn insert(&mut self, table: DailyTable) {
        self.tables.insert(table.date, table);
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

//! Long-form log → wide per-item/per-hour view.

use crate::core::calendar::ShiftCalendar;
use crate::models::{DailyTable, GridView, HourBucket, Reading, Shift};
use chrono::NaiveDate;
use std::collections::HashSet;

pub struct PivotProjector;

impl PivotProjector {
    /// Build the grid for `date` from readings in load order.
    ///
    /// When several readings fall in the same (item, hour) the first one in
    /// load order is kept. This differs from the live table, where the
    /// latest edit wins.
    pub fn project(readings: &[Reading], date: NaiveDate, shift: Shift) -> GridView {
        let mut table = DailyTable::blank(date);
        let mut filled: HashSet<(&str, HourBucket)> = HashSet::new();
        let mut conflicts = 0usize;

        for r in readings.iter().filter(|r| r.date == date) {
            let bucket = ShiftCalendar::bucket_for(r.time);

            let Some(row) = table.row_mut(&r.item) else {
                log::warn!(
                    "skipping reading for unknown item '{}' at {} {}",
                    r.item,
                    r.date_str(),
                    r.time_str()
                );
                continue;
            };

            if !filled.insert((r.item.as_str(), bucket)) {
                conflicts += 1;
                continue;
            }

            row.cells.insert(bucket, r.value.clone());
        }

        if conflicts > 0 {
            log::debug!(
                "{} duplicate reading(s) for {} ignored, first entry kept",
                conflicts,
                date
            );
        }

        table.view(shift, &ShiftCalendar::hours_of(shift))
    }
}

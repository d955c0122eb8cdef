use crate::errors::{AppError, AppResult};
use crate::models::{ChecklistCatalog, Reading};
use chrono::{NaiveDate, NaiveTime};

pub struct AddLogic;

impl AddLogic {
    /// Turn `ITEM=VALUE` entries into readings sharing one timestamp.
    ///
    /// ITEM is the 1-based checklist position or the exact item name.
    /// The value is kept verbatim, including an empty one.
    pub fn build_readings(
        machine_id: &str,
        date: NaiveDate,
        time: NaiveTime,
        entries: &[String],
    ) -> AppResult<Vec<Reading>> {
        entries
            .iter()
            .map(|entry| {
                let (token, value) = entry
                    .split_once('=')
                    .ok_or_else(|| AppError::InvalidEntry(entry.clone()))?;

                let item = ChecklistCatalog::resolve(token)
                    .ok_or_else(|| AppError::ItemNotFound(token.trim().to_string()))?;

                Ok(Reading::new(machine_id, date, time, item.name, value.trim()))
            })
            .collect()
    }
}

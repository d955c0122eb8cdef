//! Time utilities: parsing the sheet's HH:MM:SS / HH:MM fields.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Accepts `HH:MM:SS` (the stored format) and `HH:MM` (hand-edited rows).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Current local time, truncated to the second.
pub fn now() -> NaiveTime {
    let t = chrono::Local::now().time();
    t.with_nanosecond(0).unwrap_or(t)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

//! Hour buckets and shift windows.
//!
//! Morning runs 08:00..=19:00. Night runs 19:00..=23:00 followed by
//! 00:00..=08:00 of the same calendar date. 08:00 and 19:00 are handover
//! hours and appear in both shifts.

use crate::errors::{AppError, AppResult};
use crate::models::{HourBucket, Shift};
use chrono::NaiveTime;

const MORNING_START: u8 = 8;
const MORNING_END: u8 = 19;
const NIGHT_CLOSE: u8 = 8;

pub struct ShiftCalendar;

impl ShiftCalendar {
    pub fn all_hours() -> Vec<HourBucket> {
        Self::range(0, HourBucket::COUNT - 1)
    }

    /// Ordered buckets for a shift name ("morning", "night", "all").
    pub fn shift_hours(shift_name: &str) -> AppResult<Vec<HourBucket>> {
        let shift = Shift::from_name(shift_name)
            .ok_or_else(|| AppError::InvalidShift(shift_name.to_string()))?;
        Ok(Self::hours_of(shift))
    }

    pub fn hours_of(shift: Shift) -> Vec<HourBucket> {
        match shift {
            Shift::Morning => Self::range(MORNING_START, MORNING_END),
            Shift::Night => {
                let mut hours = Self::range(MORNING_END, HourBucket::COUNT - 1);
                hours.extend(Self::range(0, NIGHT_CLOSE));
                hours
            }
            Shift::All => Self::all_hours(),
        }
    }

    /// Floor, never round: 09:59:59 lands in "09:00".
    pub fn bucket_for(time: NaiveTime) -> HourBucket {
        HourBucket::from_time(time)
    }

    /// Shift used to display a freshly entered reading. Handover hours go
    /// to the shift that is starting.
    pub fn shift_for(bucket: HourBucket) -> Shift {
        if (MORNING_START..MORNING_END).contains(&bucket.hour()) {
            Shift::Morning
        } else {
            Shift::Night
        }
    }

    fn range(from: u8, to: u8) -> Vec<HourBucket> {
        (from..=to).filter_map(HourBucket::new).collect()
    }
}

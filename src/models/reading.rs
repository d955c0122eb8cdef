use super::hour::HourBucket;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub machine_id: String, // ⇔ column 0
    pub date: NaiveDate,    // ⇔ column 1 (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,    // ⇔ column 2 (TEXT "HH:MM:SS")
    pub item: String,       // ⇔ column 3, a ChecklistItem name
    pub value: String,      // ⇔ column 4, free text
}

impl Reading {
    pub fn new(
        machine_id: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        item: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            machine_id: machine_id.into(),
            date,
            time,
            item: item.into(),
            value: value.into(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }

    pub fn bucket(&self) -> HourBucket {
        HourBucket::from_time(self.time)
    }

    /// Flat row in durable column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.machine_id.clone(),
            self.date_str(),
            self.time_str(),
            self.item.clone(),
            self.value.clone(),
        ]
    }
}

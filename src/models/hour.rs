use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// An hour-of-day slot ("00:00".."23:00"). Not a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourBucket(u8);

impl HourBucket {
    pub const COUNT: u8 = 24;

    pub fn new(hour: u8) -> Option<Self> {
        (hour < Self::COUNT).then_some(Self(hour))
    }

    /// Floor a time of day to its hour. Minutes and seconds are truncated.
    pub fn from_time(time: NaiveTime) -> Self {
        Self(time.hour() as u8)
    }

    pub fn hour(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> String {
        format!("{:02}:00", self.0)
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

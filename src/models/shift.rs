use crate::errors::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named work period, possibly wrapping past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Night,
    All,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Night => "night",
            Shift::All => "all",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "morning" => Some(Shift::Morning),
            "night" => Some(Shift::Night),
            "all" => Some(Shift::All),
            _ => None,
        }
    }
}

impl FromStr for Shift {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shift::from_name(s).ok_or_else(|| AppError::InvalidShift(s.to_string()))
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

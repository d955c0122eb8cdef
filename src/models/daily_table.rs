use super::checklist::ChecklistCatalog;
use super::hour::HourBucket;
use super::shift::Shift;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub item: String,
    pub target: String,
    /// A table built by this crate always holds all 24 buckets; older
    /// tables may lack some, which views skip.
    pub cells: BTreeMap<HourBucket, String>,
}

/// Wide table for one date: one row per checklist item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTable {
    pub date: NaiveDate,
    pub rows: Vec<TableRow>,
}

impl DailyTable {
    /// All catalog items, every cell set to "".
    pub fn blank(date: NaiveDate) -> Self {
        let rows = ChecklistCatalog::items()
            .iter()
            .map(|it| TableRow {
                item: it.name.to_string(),
                target: it.target_range.to_string(),
                cells: (0..HourBucket::COUNT)
                    .filter_map(HourBucket::new)
                    .map(|h| (h, String::new()))
                    .collect(),
            })
            .collect();

        Self { date, rows }
    }

    pub fn row_mut(&mut self, item: &str) -> Option<&mut TableRow> {
        self.rows.iter_mut().find(|r| r.item == item)
    }

    pub fn cell(&self, item: &str, hour: HourBucket) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.item == item)
            .and_then(|r| r.cells.get(&hour))
            .map(String::as_str)
    }

    /// Restrict to {item, target} plus the given hours. Hours missing from
    /// the table are left out rather than reported.
    pub fn view(&self, shift: Shift, hours: &[HourBucket]) -> GridView {
        let present: Vec<HourBucket> = hours
            .iter()
            .copied()
            .filter(|h| self.rows.iter().any(|r| r.cells.contains_key(h)))
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|r| ViewRow {
                item: r.item.clone(),
                target: r.target.clone(),
                cells: present
                    .iter()
                    .filter_map(|h| r.cells.get(h).map(|v| (*h, v.clone())))
                    .collect(),
            })
            .collect();

        GridView {
            date: self.date,
            shift,
            hours: present,
            rows,
        }
    }
}

/// Read-only projection of a DailyTable for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub date: NaiveDate,
    pub shift: Shift,
    pub hours: Vec<HourBucket>,
    pub rows: Vec<ViewRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRow {
    pub item: String,
    pub target: String,
    pub cells: Vec<(HourBucket, String)>,
}

impl ViewRow {
    /// Missing cells read as "".
    pub fn cell(&self, hour: HourBucket) -> &str {
        self.cells
            .iter()
            .find(|(h, _)| *h == hour)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

impl GridView {
    pub fn row(&self, item: &str) -> Option<&ViewRow> {
        self.rows.iter().find(|r| r.item == item)
    }

    pub fn headers(&self) -> Vec<String> {
        let mut out = vec!["item".to_string(), "target".to_string()];
        out.extend(self.hours.iter().map(HourBucket::label));
        out
    }

    /// Flat string rows in header order.
    pub fn to_table(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                let mut out = vec![r.item.clone(), r.target.clone()];
                out.extend(self.hours.iter().map(|h| r.cell(*h).to_string()));
                out
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows
            .iter()
            .all(|r| r.cells.iter().all(|(_, v)| v.is_empty()))
    }
}

// src/export/model.rs

use crate::models::GridView;
use serde::Serialize;
use std::collections::BTreeMap;

/// JSON shape of an exported grid.
#[derive(Serialize, Clone, Debug)]
pub struct GridExport {
    pub date: String,
    pub shift: String,
    pub hours: Vec<String>,
    pub rows: Vec<RowExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub item: String,
    pub target: String,
    /// hour label → value; every listed hour is present, empty or not.
    pub values: BTreeMap<String, String>,
}

impl From<&GridView> for GridExport {
    fn from(view: &GridView) -> Self {
        Self {
            date: view.date.format("%Y-%m-%d").to_string(),
            shift: view.shift.as_str().to_string(),
            hours: view.hours.iter().map(|h| h.label()).collect(),
            rows: view
                .rows
                .iter()
                .map(|r| RowExport {
                    item: r.item.clone(),
                    target: r.target.clone(),
                    values: view
                        .hours
                        .iter()
                        .map(|h| (h.label(), r.cell(*h).to_string()))
                        .collect(),
                })
                .collect(),
        }
    }
}

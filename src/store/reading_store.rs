use super::{COLUMNS, RawRow, SheetBackend, SheetCache};
use crate::errors::{AppError, AppResult};
use crate::models::Reading;
use crate::utils::{date, time};
use std::time::Duration;

/// Outcome of a full load. Never an error: a failed backend yields no
/// readings and a warning.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub readings: Vec<Reading>,
    /// Rows skipped because they could not be parsed.
    pub dropped: usize,
    pub warning: Option<AppError>,
}

impl LoadReport {
    pub fn is_degraded(&self) -> bool {
        self.warning.is_some()
    }
}

/// The durable long-form log: one row per reading.
pub struct ReadingStore<B: SheetBackend> {
    cache: SheetCache<B>,
    ttl: Duration,
}

impl<B: SheetBackend> ReadingStore<B> {
    pub fn new(backend: B, ttl: Duration) -> Self {
        Self {
            cache: SheetCache::new(backend),
            ttl,
        }
    }

    /// One backend call for the whole batch. If it fails, any subset of the
    /// rows may have been written; reload to find out.
    pub fn append(&mut self, readings: &[Reading]) -> AppResult<()> {
        if readings.is_empty() {
            return Ok(());
        }

        let rows: Vec<RawRow> = readings.iter().map(Reading::to_row).collect();
        self.cache.append(&rows)?;

        log::info!(
            "appended {} reading(s) to {}",
            rows.len(),
            self.cache.backend().describe()
        );
        Ok(())
    }

    pub fn load(&mut self) -> LoadReport {
        let rows = match self.cache.get_or_refresh(self.ttl) {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("load failed, continuing without stored readings: {}", e);
                return LoadReport {
                    warning: Some(e),
                    ..LoadReport::default()
                };
            }
        };

        let mut report = LoadReport::default();
        for (idx, row) in rows.iter().enumerate() {
            if is_header(row) {
                continue;
            }
            match parse_row(idx + 1, row) {
                Ok(r) => report.readings.push(r),
                Err(e) => {
                    log::warn!("{}", e);
                    report.dropped += 1;
                }
            }
        }

        if report.dropped > 0 {
            log::warn!("{} malformed row(s) dropped during load", report.dropped);
        }

        report
    }

    pub fn backend(&self) -> &B {
        self.cache.backend()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.cache.backend_mut()
    }
}

/// The worksheet may still carry its column titles as first row.
fn is_header(row: &[String]) -> bool {
    row.get(1)
        .is_some_and(|c| c.trim().eq_ignore_ascii_case(COLUMNS[1]))
}

/// `row` is 1-based, for messages only.
pub fn parse_row(row: usize, fields: &[String]) -> AppResult<Reading> {
    let malformed = |reason: String| AppError::MalformedReading { row, reason };

    let [machine_id, date_s, time_s, item, value] = fields else {
        return Err(malformed(format!(
            "expected {} columns, found {}",
            COLUMNS.len(),
            fields.len()
        )));
    };

    let d = date::parse_date(date_s)
        .ok_or_else(|| malformed(format!("invalid date '{}'", date_s)))?;
    let t = time::parse_time(time_s)
        .ok_or_else(|| malformed(format!("invalid time '{}'", time_s)))?;

    Ok(Reading::new(
        machine_id.trim(),
        d,
        t,
        item.trim(),
        value.as_str(),
    ))
}

use super::{RawRow, SheetBackend};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Readings kept in a local SQLite table, with an audit trail in `log`.
///
/// The connection is opened on first use, so an unreachable database
/// surfaces as `BackendUnavailable` from `load_all`/`append_rows`.
pub struct SqliteSheet {
    pool: Option<DbPool>,
    path: String,
}

impl SqliteSheet {
    pub fn new(path: &str) -> Self {
        Self {
            pool: None,
            path: path.to_string(),
        }
    }

    /// Connect right away, creating the database if needed.
    pub fn open(path: &str) -> AppResult<Self> {
        let mut sheet = Self::new(path);
        sheet.connect(true)?;
        Ok(sheet)
    }

    fn unavailable<E: std::fmt::Display>(&self, e: E) -> AppError {
        AppError::BackendUnavailable(format!("{}: {}", self.path, e))
    }

    /// Only appends may create the file; reads never do.
    fn connect(&mut self, create: bool) -> AppResult<&mut DbPool> {
        if self.pool.is_none() {
            let pool = if create {
                DbPool::new(&self.path)
            } else {
                DbPool::open_existing(&self.path)
            }
            .map_err(|e| self.unavailable(e))?;
            init_db(&pool.conn).map_err(|e| self.unavailable(e))?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .ok_or_else(|| AppError::BackendUnavailable(self.path.clone()))
    }
}

impl SheetBackend for SqliteSheet {
    /// All rows in one transaction.
    fn append_rows(&mut self, rows: &[RawRow]) -> AppResult<()> {
        let path = self.path.clone();
        let pool = self.connect(true)?;
        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            for row in rows {
                queries::insert_row(&tx, row)?;
            }
            tx.commit()
        })
        .map_err(|e| AppError::BackendUnavailable(format!("{}: {}", path, e)))?;

        let machines: Vec<&str> = {
            let mut m: Vec<&str> = rows
                .iter()
                .filter_map(|r| r.first().map(String::as_str))
                .collect();
            m.sort_unstable();
            m.dedup();
            m
        };

        // Non-blocking: the readings are already committed.
        if let Err(e) = ttlog(
            &pool.conn,
            "append",
            &machines.join(","),
            &format!("{} reading(s) appended", rows.len()),
        ) {
            log::warn!("failed to write internal log: {}", e);
        }

        Ok(())
    }

    fn load_all(&mut self) -> AppResult<Vec<RawRow>> {
        if self.pool.is_none() && !Path::new(&self.path).exists() {
            return Ok(Vec::new());
        }

        let path = self.path.clone();
        let pool = self.connect(false)?;
        queries::load_rows(&pool.conn)
            .map_err(|e| AppError::BackendUnavailable(format!("{}: {}", path, e)))
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}

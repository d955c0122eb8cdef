//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backing store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid shift: {0} (expected morning, night or all)")]
    InvalidShift(String),

    #[error("Malformed reading at row {row}: {reason}")]
    MalformedReading { row: usize, reason: String },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Checklist item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid entry '{0}': expected ITEM=VALUE")]
    InvalidEntry(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// True for the failures the UI degrades around instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::BackendUnavailable(_) | AppError::MalformedReading { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

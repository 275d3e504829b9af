//! Unified application error type.
//! Everything outside the resolvers (db, import, cli, config) returns AppError
//! so command handlers can propagate with `?`.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Payload / parsing errors
    // ---------------------------
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API responded with failure: {0}")]
    Envelope(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Invalid day name: {0}")]
    InvalidWeekday(String),

    #[error("Invalid period number: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Snapshot errors
    // ---------------------------
    #[error("No {0} imported yet. Run `rcampus import` first")]
    MissingSnapshot(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

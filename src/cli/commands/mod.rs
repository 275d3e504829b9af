use chrono::NaiveDate;

use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub mod attendance;
pub mod config;
pub mod export;
pub mod fees;
pub mod import;
pub mod init;
pub mod log;
pub mod routine;
pub mod session;
pub mod subjects;
pub mod teachers;
pub mod today;

/// `--today` override, or the local date.
pub fn resolve_today(cli: &Cli) -> AppResult<NaiveDate> {
    match &cli.today {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}

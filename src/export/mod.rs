//! Attendance and routine export to CSV or JSON.

mod fs_utils;
mod json_csv;
pub mod model;

pub use fs_utils::prepare_output;
pub use json_csv::{export_csv, export_json};
pub use model::{AttendanceDayExport, RoutineSlotExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed: {rows} row(s) written to {}",
        path.display()
    ));
}

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// `.json` (any case) selects JSON; every other extension is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }

    /// An explicit `--format` wins over the file extension.
    pub fn resolve(explicit: Option<&ExportFormat>, path: &Path) -> Self {
        explicit.cloned().unwrap_or_else(|| Self::from_path(path))
    }
}

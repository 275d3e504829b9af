use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use std::path::Path;

use crate::core::calculator::calendar::month_calendar;
use crate::core::calculator::schedule::{active_days, period_time};
use crate::core::calculator::status::StatusContext;
use crate::core::logic::Snapshot;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{
    AttendanceDayExport, ExportFormat, RoutineSlotExport, export_csv, export_json,
    prepare_output,
};
use crate::models::routine::{OffDays, Routine};
use crate::utils::date::weekday_name;

pub struct ExportLogic;

/// What to export.
pub enum ExportTarget {
    AttendanceMonth { year: i32, month: u32 },
    Routine,
}

impl ExportLogic {
    /// One row per day of the month, leading blanks dropped.
    pub fn attendance_rows(
        ctx: &StatusContext<'_>,
        year: i32,
        month: u32,
        week_start: Weekday,
    ) -> Vec<AttendanceDayExport> {
        let hhmm = |t: Option<NaiveTime>| {
            t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
        };

        month_calendar(year, month, week_start, ctx)
            .days()
            .map(|cell| {
                let record = ctx.record_on(cell.date);
                AttendanceDayExport {
                    date: cell.date.format("%Y-%m-%d").to_string(),
                    weekday: weekday_name(cell.date.weekday()).to_string(),
                    status: cell.status.as_str().to_string(),
                    in_time: hhmm(record.and_then(|r| r.in_time)),
                    out_time: hhmm(record.and_then(|r| r.out_time)),
                }
            })
            .collect()
    }

    /// Scheduled periods in active-day order, then by period number.
    pub fn routine_rows(routine: &Routine, week_start: Weekday) -> Vec<RoutineSlotExport> {
        let mut out = Vec::new();

        for day in active_days(Some(routine), week_start) {
            let mut details: Vec<_> = routine
                .details
                .iter()
                .filter(|d| d.day == Some(day))
                .filter_map(|d| d.period_number.map(|p| (p, d)))
                .collect();
            details.sort_by_key(|(p, _)| *p);

            for (period, d) in details {
                out.push(RoutineSlotExport {
                    day: weekday_name(day).to_string(),
                    period,
                    time: d
                        .time
                        .clone()
                        .unwrap_or_else(|| period_time(routine, period).to_string()),
                    subject: d.subject.clone().unwrap_or_default(),
                    teacher: d.teacher.clone().unwrap_or_default(),
                });
            }
        }

        out
    }

    pub fn run(
        pool: &mut DbPool,
        target: ExportTarget,
        format: &ExportFormat,
        path: &Path,
        force: bool,
        today: NaiveDate,
        week_start: Weekday,
    ) -> AppResult<usize> {
        let snapshot = Snapshot::load(pool)?;

        prepare_output(path, force)?;

        let (label, n) = match target {
            ExportTarget::AttendanceMonth { year, month } => {
                let no_off_days = OffDays::default();
                let ctx = snapshot.status_context(today, &no_off_days);
                let rows = Self::attendance_rows(&ctx, year, month, week_start);
                write_rows(&rows, format, path)?;
                (format!("attendance {year}-{month:02}"), rows.len())
            }
            ExportTarget::Routine => {
                let routine = snapshot
                    .routine()
                    .ok_or(AppError::MissingSnapshot("class routine"))?;
                let rows = Self::routine_rows(routine, week_start);
                write_rows(&rows, format, path)?;
                (format!("routine {}", routine.label()), rows.len())
            }
        };

        ttlog_soft(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{label}: {n} rows to {}", path.display()),
        );

        Ok(n)
    }
}

fn write_rows<T: serde::Serialize>(rows: &[T], format: &ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

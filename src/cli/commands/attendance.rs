use chrono::Datelike;

use crate::cli::commands::resolve_today;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::calendar::month_calendar;
use crate::core::calculator::summary::summarize;
use crate::core::logic::Snapshot;
use crate::core::view::{render_calendar, render_history, render_summary};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::routine::OffDays;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_status, paint};
use crate::utils::date::{parse_date, parse_month, shift_month, weekday_name};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Attendance {
        summary,
        month,
        prev,
        next,
        date,
        history,
    } = &cli.command
    {
        let today = resolve_today(cli)?;
        let mut pool = DbPool::open(&cfg.database)?;
        let snapshot = Snapshot::load(&mut pool)?;

        if snapshot.records.is_empty() {
            info("No attendance records imported yet.");
        }

        let no_off_days = OffDays::default();
        let ctx = snapshot.status_context(today, &no_off_days);
        let shifted = *prev || *next;
        let show_default =
            !*summary && month.is_none() && !shifted && date.is_none() && !*history;

        if let Some(d) = date {
            let day = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            let status = ctx.resolve(day);
            println!(
                "{} ({}): {}",
                day,
                weekday_name(day.weekday()),
                paint(status.as_str(), color_for_status(status))
            );
        }

        if *summary || show_default {
            header("Attendance summary");
            print!(
                "{}",
                render_summary(&summarize(&snapshot.records), cfg.attendance_threshold)
            );
        }

        if month.is_some() || shifted || show_default {
            let (year, m) = match month {
                Some(s) => parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.clone()))?,
                None => (today.year(), today.month()),
            };
            let delta = match (*prev, *next) {
                (true, _) => -1,
                (_, true) => 1,
                _ => 0,
            };
            let (year, m) = shift_month(year, m, delta);
            header("Attendance calendar");
            let cal = month_calendar(year, m, cfg.week_start_day(), &ctx);
            print!("{}", render_calendar(&cal));
        }

        if *history {
            header("Attendance history");
            print!(
                "{}",
                render_history(&snapshot.records, &cfg.time_format, &cfg.separator_char)
            );
        }
    }

    Ok(())
}

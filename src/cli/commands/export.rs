use chrono::Datelike;

use crate::cli::commands::resolve_today;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::export::{ExportLogic, ExportTarget};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::date::parse_month;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        routine,
        force,
    } = &cli.command
    {
        let today = resolve_today(cli)?;

        let target = if *routine {
            ExportTarget::Routine
        } else {
            let (year, month) = match month {
                Some(s) => parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.clone()))?,
                None => (today.year(), today.month()),
            };
            ExportTarget::AttendanceMonth { year, month }
        };

        let path = expand_tilde(file);
        let format = ExportFormat::resolve(format.as_ref(), &path);

        let mut pool = DbPool::open(&cfg.database)?;
        ExportLogic::run(
            &mut pool,
            target,
            &format,
            &path,
            *force,
            today,
            cfg.week_start_day(),
        )?;
    }

    Ok(())
}

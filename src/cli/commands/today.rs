use chrono::Datelike;

use crate::cli::commands::resolve_today;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::schedule::todays_schedule;
use crate::core::logic::Snapshot;
use crate::core::view::render_today;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::{weekday_from_input, weekday_name};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { day } = &cli.command {
        let weekday = match day {
            Some(d) => weekday_from_input(d).ok_or_else(|| AppError::InvalidWeekday(d.clone()))?,
            None => resolve_today(cli)?.weekday(),
        };

        let mut pool = DbPool::open(&cfg.database)?;
        let snapshot = Snapshot::load(&mut pool)?;

        let schedule = snapshot.routine().map(|r| todays_schedule(r, weekday));

        header(format!("Classes on {}", weekday_name(weekday)));
        print!("{}", render_today(schedule.as_ref(), &cfg.separator_char));
    }

    Ok(())
}

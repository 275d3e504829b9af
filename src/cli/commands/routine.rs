use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::schedule::{period_detail, period_time};
use crate::core::logic::Snapshot;
use crate::core::view::{NO_ROUTINE, render_routine};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::date::{weekday_from_input, weekday_name};

pub fn parse_period(s: &str) -> AppResult<u32> {
    match s.trim().parse::<u32>() {
        Ok(p) if p > 0 => Ok(p),
        _ => Err(AppError::InvalidPeriod(s.to_string())),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Routine { day, period } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let snapshot = Snapshot::load(&mut pool)?;

        let Some(routine) = snapshot.routine() else {
            info(NO_ROUTINE);
            return Ok(());
        };

        match (day, period) {
            (Some(d), Some(p)) => {
                let wd = weekday_from_input(d).ok_or_else(|| AppError::InvalidWeekday(d.clone()))?;
                let p = parse_period(p)?;
                match period_detail(routine, wd, p) {
                    Some(detail) => println!(
                        "{} period {}: {} | {} | {}",
                        weekday_name(wd),
                        p,
                        detail.subject.as_deref().unwrap_or("Subject"),
                        detail.teacher.as_deref().unwrap_or("-"),
                        detail.time.as_deref().unwrap_or(period_time(routine, p)),
                    ),
                    None => println!("{} period {}: No class", weekday_name(wd), p),
                }
            }
            (None, Some(p)) => {
                let p = parse_period(p)?;
                println!("Period {}: {}", p, period_time(routine, p));
            }
            _ => {
                header("Class routine");
                print!(
                    "{}",
                    render_routine(routine, cfg.week_start_day(), &cfg.separator_char)
                );
            }
        }
    }

    Ok(())
}

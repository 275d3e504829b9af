use crate::config::Config;
use crate::core::logic::Snapshot;
use crate::core::view::{NO_CLASS, render_subjects};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(&cfg.database)?;
    let snapshot = Snapshot::load(&mut pool)?;

    let Some(subjects) = snapshot.assigned_subjects() else {
        info(NO_CLASS);
        return Ok(());
    };

    header("Subjects");
    print!("{}", render_subjects(&subjects, &cfg.separator_char));
    Ok(())
}

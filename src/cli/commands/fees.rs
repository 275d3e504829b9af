use crate::config::Config;
use crate::core::calculator::fees::fee_status;
use crate::core::logic::Snapshot;
use crate::core::view::render_fees;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(&cfg.database)?;
    let snapshot = Snapshot::load(&mut pool)?;

    if snapshot.fees.is_none() {
        info("No fee summary imported yet.");
    }

    header("Fees");
    print!("{}", render_fees(&fee_status(snapshot.fees.as_ref())));
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::teachers::search_teachers;
use crate::core::logic::Snapshot;
use crate::core::view::render_teachers;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Teachers { search } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let snapshot = Snapshot::load(&mut pool)?;

        let directory = snapshot.teachers();
        let matches = search_teachers(&directory, search.as_deref().unwrap_or(""));

        match search {
            Some(q) => header(format!("Teachers matching \"{q}\"")),
            None => header("Teachers"),
        }
        print!("{}", render_teachers(&matches, &cfg.separator_char));
    }

    Ok(())
}

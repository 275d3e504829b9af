use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::input_file;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session {
        token,
        user,
        show,
        clear,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;

        if *clear {
            SessionLogic::clear(&mut pool)?;
        }
        if let Some(t) = token {
            SessionLogic::set_token(&mut pool, t)?;
        }
        if let Some(u) = user {
            SessionLogic::set_user(&mut pool, &input_file(u)?)?;
        }
        if *show || (!*clear && token.is_none() && user.is_none()) {
            SessionLogic::show(&mut pool)?;
        }
    }

    Ok(())
}

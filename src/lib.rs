//! rcampus library root.
//! Exposes the CLI parser, the high-level run() function, the attendance,
//! schedule and directory resolvers, and the snapshot storage.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Attendance { .. } => cli::commands::attendance::handle(cli, cfg),
        Commands::Routine { .. } => cli::commands::routine::handle(&cli.command, cfg),
        Commands::Today { .. } => cli::commands::today::handle(cli, cfg),
        Commands::Subjects => cli::commands::subjects::handle(cfg),
        Commands::Teachers { .. } => cli::commands::teachers::handle(&cli.command, cfg),
        Commands::Fees => cli::commands::fees::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once
    let mut cfg = Config::load()?;

    // --db overrides the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}

pub mod calculator;
pub mod config;
pub mod export;
pub mod import;
pub mod log;
pub mod logic;
pub mod session;
pub mod view;

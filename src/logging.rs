//! Terminal logger setup.

use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("loglevel must be debug, info, warn or error. got {0:?}")]
    UnknownLevel(String),

    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}


/// Maps `"debug" | "info" | "warn" | "error"` to a [`LevelFilter`].
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    match level {
        "debug" => Ok(LevelFilter::Debug),
        "info"  => Ok(LevelFilter::Info),
        "warn"  => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        other   => Err(LoggingError::UnknownLevel(other.to_string())),
    }
}


/// Installs a terminal logger at `level`. Fails if a logger is already set.
pub fn init_logger(level: &str) -> Result<(), LoggingError> {
    let filter = parse_level(level)?;
    CombinedLogger::init(vec![TermLogger::new(
        filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;
    Ok(())
}

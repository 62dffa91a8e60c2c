//! # cu_log - Console Logger
//!
//! A `log` backend that prints `<timestamp> <tag> <message>` lines with
//! color-coded severity tags. Errors go to stderr, everything else to stdout.
//!
//! ```ignore
//! cu_log::init(cu_log::LoggerConfig::default())?;
//! cu_log::info("renderer ready");
//! log::warn!("swapchain out of date");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod logger;

pub use config::*;
pub use error::*;
pub use format::{format_line, level_tag, timestamp};
pub use logger::*;

pub use log::Level;

/// Install a [`ConsoleLogger`] as the global logger
pub fn init(config: LoggerConfig) -> Result<()> {
    let logger = ConsoleLogger::new(config);
    let max_level = logger.max_level();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}

/// Install a [`ConsoleLogger`] with the default configuration
pub fn init_default() -> Result<()> {
    init(LoggerConfig::default())
}

/// Emit `msg` at `level` through the installed logger
pub fn log(level: Level, msg: &str) {
    log::log!(level, "{}", msg);
}

pub fn info(msg: &str) {
    log(Level::Info, msg);
}

pub fn warn(msg: &str) {
    log(Level::Warn, msg);
}

pub fn error(msg: &str) {
    log(Level::Error, msg);
}

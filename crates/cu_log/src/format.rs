//! Line formatting: `<timestamp> <tag> <message>`

use crate::config::LoggerConfig;
use chrono::NaiveDateTime;
use log::Level;
use std::fmt;

/// Severity tag, optionally wrapped in ANSI color codes
pub fn level_tag(level: Level, color: bool) -> &'static str {
    match (level, color) {
        (Level::Error, true) => "\x1b[31m[error]\x1b[0m",
        (Level::Warn, true) => "\x1b[33m[warn]\x1b[0m",
        (Level::Info, true) => "\x1b[32m[info]\x1b[0m",
        (Level::Error, false) => "[error]",
        (Level::Warn, false) => "[warn]",
        (Level::Info, false) => "[info]",
        (Level::Debug, _) => "[debug]",
        (Level::Trace, _) => "[trace]",
    }
}

/// Render `now` per the config; empty when both date and time are off
pub fn timestamp(config: &LoggerConfig, now: &NaiveDateTime) -> String {
    match config.timestamp_format() {
        Some(pattern) => now.format(pattern).to_string(),
        None => String::new(),
    }
}

/// Full log line without the trailing newline.
///
/// With an empty timestamp the line still starts with the separating space.
pub fn format_line(
    config: &LoggerConfig,
    level: Level,
    message: &dyn fmt::Display,
    now: &NaiveDateTime,
) -> String {
    format!(
        "{} {} {}",
        timestamp(config, now),
        level_tag(level, config.color),
        message
    )
}

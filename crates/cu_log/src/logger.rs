//! Console backend for the `log` facade

use crate::config::LoggerConfig;
use crate::format::format_line;
use chrono::{Local, NaiveDateTime};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};

/// Output stream a record is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Errors go to stderr, everything else to stdout
    pub fn for_level(level: Level) -> Self {
        if level == Level::Error {
            Self::Stderr
        } else {
            Self::Stdout
        }
    }
}

/// Writes timestamped, tagged lines to stdout/stderr.
///
/// Which records pass is decided by an inner `env_logger` filter built from
/// the config's fallback level and its filter environment variable.
pub struct ConsoleLogger {
    config: LoggerConfig,
    filter: env_logger::Logger,
}

impl ConsoleLogger {
    pub fn new(config: LoggerConfig) -> Self {
        let filter = env_logger::Builder::new()
            .filter_level(config.level)
            .parse_env(env_logger::Env::new().filter(config.filter_env.as_str()))
            .build();
        Self { config, filter }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Most verbose level any directive lets through
    pub fn max_level(&self) -> LevelFilter {
        self.filter.filter()
    }

    /// Write one record as a full line to `out`
    pub fn write_record<W: Write>(
        &self,
        out: &mut W,
        record: &Record<'_>,
        now: &NaiveDateTime,
    ) -> io::Result<()> {
        let line = format_line(&self.config, record.level(), record.args(), now);
        writeln!(out, "{}", line)
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = Local::now().naive_local();
        // Write failures are dropped; there is nowhere left to report them.
        let _ = match Stream::for_level(record.level()) {
            Stream::Stdout => self.write_record(&mut io::stdout().lock(), record, &now),
            Stream::Stderr => self.write_record(&mut io::stderr().lock(), record, &now),
        };
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

//! Logger configuration

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Environment variable read for filter directives by default
pub const DEFAULT_FILTER_ENV: &str = "CU_LOG";

/// Console logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Prefix lines with the local date (`%Y/%m/%d`)
    pub show_date: bool,

    /// Prefix lines with the local time (`%H:%M:%S`)
    pub show_time: bool,

    /// Wrap severity tags in ANSI color codes
    pub color: bool,

    /// Level used when the filter variable is unset
    pub level: LevelFilter,

    /// Environment variable holding `env_logger`-style filter directives
    pub filter_env: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            show_date: true,
            show_time: true,
            color: true,
            level: LevelFilter::Info,
            filter_env: DEFAULT_FILTER_ENV.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Plain output for files and CI logs: no colors
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Default::default()
        }
    }

    /// `strftime` pattern for the timestamp, `None` when neither part is shown
    pub fn timestamp_format(&self) -> Option<&'static str> {
        match (self.show_date, self.show_time) {
            (true, true) => Some("%Y/%m/%d %H:%M:%S"),
            (true, false) => Some("%Y/%m/%d"),
            (false, true) => Some("%H:%M:%S"),
            (false, false) => None,
        }
    }

    /// Set date display
    pub fn with_date(mut self, show: bool) -> Self {
        self.show_date = show;
        self
    }

    /// Set time display
    pub fn with_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Set tag coloring
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set fallback level
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Set the filter environment variable name
    pub fn with_filter_env(mut self, name: impl Into<String>) -> Self {
        self.filter_env = name.into();
        self
    }
}

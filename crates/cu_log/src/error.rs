//! Error types for logger installation

use thiserror::Error;

/// Logger errors
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Another global logger was installed first
    #[error("A global logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, LoggerError>;

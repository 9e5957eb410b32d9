//! # Logger Errors
//!
//! Error types for logger configuration and activation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or launching a logger.
#[derive(Debug, Error)]
pub enum LogError {
    /// Level name is not one of debug, info, warning, error, critical
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// Color name could not be parsed
    #[error("Unknown log color: {0}")]
    UnknownColor(String),

    /// The log file could not be opened for appending
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be read
    #[error("Failed to read logger settings {path}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`crate::LoggerSettings`]
    #[error("Invalid logger settings: {0}")]
    Settings(#[from] toml::de::Error),
}

impl LogError {
    /// Creates an open error for the given log file.
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LogError::UnknownLevel("loud".to_string());
        assert!(err.to_string().contains("loud"));

        let err = LogError::open(
            "missing/dir/log.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(err.to_string().contains("missing/dir/log.txt"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogError>();
    }
}

//! # Mesh CLI
//!
//! Helpers shared by the pipeline binaries: logger setup from an optional
//! settings file and the exit policy for files of the wrong format.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mesh_io::IoError;
use mesh_log::{Level, Logger, LoggerBuilder, LoggerSettings};

/// Exit status used when an input or output path has the wrong extension.
pub const FORMAT_MISMATCH_STATUS: i32 = 1;

/// Logger options accepted by every binary.
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Logger settings file (TOML).
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Minimum level, overriding the settings file.
    #[arg(long)]
    pub level: Option<Level>,
}

impl LogArgs {
    /// Builder described by these options, not yet launched.
    pub fn builder(&self) -> Result<LoggerBuilder> {
        let mut settings = match &self.settings {
            Some(path) => LoggerSettings::load(path)
                .with_context(|| format!("Loading logger settings from {}", path.display()))?,
            None => LoggerSettings::default(),
        };
        if let Some(level) = self.level {
            settings.level = level;
        }
        Ok(settings.builder()?)
    }

    /// Activates the logger.
    pub fn launch(&self) -> Result<Logger> {
        Ok(self.builder()?.launch()?)
    }
}

/// Passes `result` through, except that a format mismatch ends the process
/// with [`FORMAT_MISMATCH_STATUS`]. The reader has already logged it.
pub fn exit_on_mismatch<T>(result: Result<T, IoError>) -> Result<T> {
    match result {
        Err(IoError::FormatMismatch { .. }) => std::process::exit(FORMAT_MISMATCH_STATUS),
        other => Ok(other?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_launch_console_logger() {
        let logger = LogArgs::default().launch().unwrap();
        assert_eq!(logger.name(), config::constants::DEFAULT_LOGGER_NAME);
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_level_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.toml");
        std::fs::write(&path, "name = \"gen\"\nlevel = \"info\"\n").unwrap();

        let args = LogArgs {
            settings: Some(path),
            level: Some(Level::Error),
        };
        let logger = args.launch().unwrap();
        assert_eq!(logger.name(), "gen");
        assert_eq!(logger.level(), Level::Error);
    }

    #[test]
    fn test_missing_settings_file() {
        let args = LogArgs {
            settings: Some(PathBuf::from("/nonexistent/log.toml")),
            level: None,
        };
        assert!(args.launch().is_err());
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = exit_on_mismatch::<()>(Err(IoError::unsupported("binary msh"))).unwrap_err();
        assert!(err.to_string().contains("binary msh"));
        assert_eq!(exit_on_mismatch(Ok(3)).unwrap(), 3);
    }
}

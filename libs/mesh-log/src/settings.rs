//! # Logger Settings
//!
//! File-driven logger configuration.
//!
//! ```toml
//! name = "my_logger"
//! level = "info"
//! handler = "txt"
//! file = "run.log"
//! show_name = true
//! join = "|"
//!
//! [colors]
//! CRITICAL = "red,bg_white"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::constants::{DEFAULT_LOGGER_NAME, DEFAULT_LOG_FILE, DEFAULT_LOG_JOIN};
use serde::Deserialize;

use crate::{Format, Handler, Level, LogColors, LogError, LoggerBuilder};

/// Handler selection as written in settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    #[default]
    Console,
    #[serde(alias = "file")]
    Txt,
}

/// Serializable mirror of [`LoggerBuilder`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub name: String,
    pub level: Level,
    pub handler: HandlerKind,
    pub file: PathBuf,
    pub color: bool,
    pub time: bool,
    pub show_name: bool,
    pub join: String,
    pub colors: BTreeMap<String, String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            level: Level::default(),
            handler: HandlerKind::Console,
            file: PathBuf::from(DEFAULT_LOG_FILE),
            color: true,
            time: true,
            show_name: false,
            join: DEFAULT_LOG_JOIN.to_string(),
            colors: BTreeMap::new(),
        }
    }
}

impl LoggerSettings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, LogError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LogError> {
        let text = std::fs::read_to_string(path).map_err(|source| LogError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Builder configured from these settings, ready to launch.
    pub fn builder(&self) -> Result<LoggerBuilder, LogError> {
        let handler = match self.handler {
            HandlerKind::Console => Handler::Console,
            HandlerKind::Txt => Handler::File(self.file.clone()),
        };
        let format = Format {
            color: self.color && self.handler == HandlerKind::Console,
            time: self.time,
            name: self.show_name,
            join: self.join.clone(),
        };

        Ok(LoggerBuilder::new(self.name.clone(), self.level)
            .set_handler(handler)
            .set_format(format)
            .set_log_colors(LogColors::from_pairs(&self.colors)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ColorSpec};

    #[test]
    fn test_empty_settings_are_defaults() {
        let settings = LoggerSettings::from_toml_str("").unwrap();
        assert_eq!(settings, LoggerSettings::default());
    }

    #[test]
    fn test_parse_settings() {
        let settings = LoggerSettings::from_toml_str(
            r#"
            name = "pipeline"
            level = "warning"
            handler = "txt"
            file = "run.log"
            show_name = true
            join = "|"

            [colors]
            INFO = "cyan"
            "#,
        )
        .unwrap();

        assert_eq!(settings.name, "pipeline");
        assert_eq!(settings.level, Level::Warning);
        assert_eq!(settings.handler, HandlerKind::Txt);
        assert_eq!(settings.file, PathBuf::from("run.log"));
        assert!(settings.show_name);
        assert_eq!(settings.colors.get("INFO").map(String::as_str), Some("cyan"));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let result = LoggerSettings::from_toml_str(r#"level = "chatty""#);
        assert!(matches!(result, Err(LogError::Settings(_))));
    }

    #[test]
    fn test_builder_writes_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LoggerSettings {
            handler: HandlerKind::Txt,
            file: dir.path().join("run.log"),
            time: false,
            ..LoggerSettings::default()
        };

        let logger = settings.builder().unwrap().launch().unwrap();
        logger.info("configured");

        let text = std::fs::read_to_string(dir.path().join("run.log")).unwrap();
        assert_eq!(text.trim_end(), "INFO - configured");
    }

    #[test]
    fn test_builder_rejects_bad_color() {
        let mut settings = LoggerSettings::default();
        settings.colors.insert("DEBUG".into(), "ultraviolet".into());
        assert!(matches!(settings.builder(), Err(LogError::UnknownColor(_))));

        settings.colors.insert("DEBUG".into(), "cyan".into());
        assert!(settings.builder().is_ok());
        assert_eq!(
            LogColors::from_pairs(&settings.colors).unwrap().get(Level::Debug),
            ColorSpec::fg(Color::Cyan)
        );
    }
}

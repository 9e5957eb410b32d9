//! # Record Formatting
//!
//! Line templates and per-level console colors.

use std::fmt;
use std::str::FromStr;

use config::constants::DEFAULT_LOG_JOIN;
use owo_colors::{AnsiColors, Style};

use crate::{Level, LogError};

// =============================================================================
// LINE FORMAT
// =============================================================================

/// Which parts of a record are written, and how they are joined.
///
/// The rendered line is `[time J ][name J ]LEVEL J message` where `J` is
/// [`Format::join`] surrounded by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Colorize console output by level
    pub color: bool,
    /// Prefix the record with a timestamp
    pub time: bool,
    /// Include the logger name
    pub name: bool,
    /// Separator between the parts
    pub join: String,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            color: true,
            time: true,
            name: false,
            join: DEFAULT_LOG_JOIN.to_string(),
        }
    }
}

impl Format {
    /// Same layout without color.
    pub fn plain(self) -> Self {
        Self {
            color: false,
            ..self
        }
    }

    /// Renders one record as an uncolored line (no trailing newline).
    pub fn render(
        &self,
        timestamp: &str,
        logger_name: &str,
        level: Level,
        message: &dyn fmt::Display,
    ) -> String {
        let mut line = String::new();
        if self.time {
            line.push_str(timestamp);
            line.push(' ');
            line.push_str(&self.join);
            line.push(' ');
        }
        if self.name {
            line.push_str(logger_name);
            line.push(' ');
            line.push_str(&self.join);
            line.push(' ');
        }
        line.push_str(level.as_str());
        line.push(' ');
        line.push_str(&self.join);
        line.push(' ');
        line.push_str(&message.to_string());
        line
    }
}

// =============================================================================
// COLORS
// =============================================================================

/// Terminal color names accepted in color specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl Color {
    fn ansi(self) -> AnsiColors {
        match self {
            Color::Black => AnsiColors::Black,
            Color::Red => AnsiColors::Red,
            Color::Green => AnsiColors::Green,
            Color::Yellow => AnsiColors::Yellow,
            Color::Blue => AnsiColors::Blue,
            Color::Purple => AnsiColors::Magenta,
            Color::Cyan => AnsiColors::Cyan,
            Color::White => AnsiColors::White,
        }
    }
}

impl FromStr for Color {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "purple" | "magenta" => Ok(Color::Purple),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            _ => Err(LogError::UnknownColor(s.to_string())),
        }
    }
}

/// Foreground/background pair for one level.
///
/// Parsed from comma-separated tokens: a plain color name sets the
/// foreground, `bg_<color>` the background and `bold` / `bold_<color>`
/// makes the text bold, e.g. `"red,bg_white"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSpec {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl ColorSpec {
    /// Foreground-only spec.
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
        }
    }

    /// Adds a background color.
    pub const fn on(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Terminal style for this spec.
    pub fn style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.fg {
            style = style.color(fg.ansi());
        }
        if let Some(bg) = self.bg {
            style = style.on_color(bg.ansi());
        }
        if self.bold {
            style = style.bold();
        }
        style
    }
}

impl FromStr for ColorSpec {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut spec = ColorSpec::default();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if let Some(bg) = token.strip_prefix("bg_") {
                spec.bg = Some(bg.parse()?);
            } else if token == "bold" {
                spec.bold = true;
            } else if let Some(fg) = token.strip_prefix("bold_") {
                spec.bold = true;
                spec.fg = Some(fg.parse()?);
            } else {
                spec.fg = Some(token.parse()?);
            }
        }
        Ok(spec)
    }
}

/// Color used for each level on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogColors {
    specs: [ColorSpec; 5],
}

impl Default for LogColors {
    fn default() -> Self {
        Self {
            specs: [
                ColorSpec::fg(Color::Blue),
                ColorSpec::fg(Color::Green),
                ColorSpec::fg(Color::Yellow),
                ColorSpec::fg(Color::Red),
                ColorSpec::fg(Color::Red).on(Color::White),
            ],
        }
    }
}

impl LogColors {
    /// Parses `(level, spec)` pairs such as `("CRITICAL", "red,bg_white")`.
    ///
    /// Levels missing from the input fall back to the defaults.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, LogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut colors = Self::default();
        for (level, spec) in pairs {
            let level: Level = level.as_ref().parse()?;
            colors.set(level, spec.as_ref().parse()?);
        }
        Ok(colors)
    }

    /// Spec for a level.
    pub fn get(&self, level: Level) -> ColorSpec {
        self.specs[level as usize]
    }

    /// Replaces the spec for a level.
    pub fn set(&mut self, level: Level, spec: ColorSpec) {
        self.specs[level as usize] = spec;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_layout() {
        let line = Format::default().render("2024-01-01 00:00:00,000", "my_logger", Level::Info, &"hi");
        assert_eq!(line, "2024-01-01 00:00:00,000 - INFO - hi");
    }

    #[test]
    fn test_format_with_name_and_custom_join() {
        let format = Format {
            name: true,
            join: "|".to_string(),
            ..Format::default()
        };
        let line = format.render("T", "my_logger", Level::Error, &"boom");
        assert_eq!(line, "T | my_logger | ERROR | boom");
    }

    #[test]
    fn test_format_without_time() {
        let format = Format {
            time: false,
            ..Format::default()
        };
        assert_eq!(format.render("T", "n", Level::Debug, &42), "DEBUG - 42");
    }

    #[test]
    fn test_plain_keeps_layout() {
        let format = Format {
            name: true,
            ..Format::default()
        }
        .plain();
        assert!(!format.color);
        assert!(format.name);
    }

    #[test]
    fn test_parse_color_spec() {
        let spec: ColorSpec = "red,bg_white".parse().unwrap();
        assert_eq!(spec.fg, Some(Color::Red));
        assert_eq!(spec.bg, Some(Color::White));
        assert!(!spec.bold);

        let spec: ColorSpec = "bold_purple".parse().unwrap();
        assert_eq!(spec.fg, Some(Color::Purple));
        assert!(spec.bold);
    }

    #[test]
    fn test_parse_unknown_color() {
        assert!(matches!(
            "red,bg_plaid".parse::<ColorSpec>(),
            Err(LogError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_default_colors() {
        let colors = LogColors::default();
        assert_eq!(colors.get(Level::Debug), ColorSpec::fg(Color::Blue));
        assert_eq!(colors.get(Level::Info), ColorSpec::fg(Color::Green));
        assert_eq!(colors.get(Level::Warning), ColorSpec::fg(Color::Yellow));
        assert_eq!(colors.get(Level::Error), ColorSpec::fg(Color::Red));
        assert_eq!(
            colors.get(Level::Critical),
            ColorSpec::fg(Color::Red).on(Color::White)
        );
    }

    #[test]
    fn test_colors_from_pairs_overrides_only_given_levels() {
        let colors = LogColors::from_pairs([("INFO", "cyan"), ("debug", "white")]).unwrap();
        assert_eq!(colors.get(Level::Info), ColorSpec::fg(Color::Cyan));
        assert_eq!(colors.get(Level::Debug), ColorSpec::fg(Color::White));
        assert_eq!(colors.get(Level::Error), ColorSpec::fg(Color::Red));
    }
}

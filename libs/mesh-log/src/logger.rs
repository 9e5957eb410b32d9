//! # Logger
//!
//! Builder-then-launch logger. Configuration happens on [`LoggerBuilder`];
//! [`LoggerBuilder::launch`] consumes it and returns the only handle that
//! can record messages.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use config::constants::{DEFAULT_LOGGER_NAME, LOG_TIME_FORMAT};
use owo_colors::OwoColorize;

use crate::{Format, Level, LogColors, LogError};

/// Where records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Standard error, colored when the format asks for it
    Console,
    /// Plain-text file, opened for appending
    File(PathBuf),
}

impl Handler {
    /// File handler for the given path.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Handler::File(path.into())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::Console
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Logger configuration, finalized by [`LoggerBuilder::launch`].
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    name: String,
    level: Level,
    handler: Handler,
    format: Format,
    colors: LogColors,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_LOGGER_NAME, Level::default())
    }
}

impl LoggerBuilder {
    /// Starts a console logger with the default format and colors.
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level,
            handler: Handler::Console,
            format: Format::default(),
            colors: LogColors::default(),
        }
    }

    /// Selects the output target.
    ///
    /// Choosing a file resets the format to the default layout without
    /// color; call [`LoggerBuilder::set_format`] afterwards to change it.
    pub fn set_handler(mut self, handler: Handler) -> Self {
        if matches!(handler, Handler::File(_)) {
            self.format = Format::default().plain();
        }
        self.handler = handler;
        self
    }

    /// Sets the line layout.
    pub fn set_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Sets the console colors per level.
    pub fn set_log_colors(mut self, colors: LogColors) -> Self {
        self.colors = colors;
        self
    }

    /// Activates the logger.
    ///
    /// Opens the log file for the file handler.
    pub fn launch(self) -> Result<Logger, LogError> {
        let sink = match &self.handler {
            Handler::Console => Sink::Console,
            Handler::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| LogError::open(path, e))?;
                Sink::File(LineWriter::new(file))
            }
        };

        Ok(Logger {
            colored: self.format.color && sink.is_console(),
            name: self.name,
            level: self.level,
            format: self.format,
            colors: self.colors,
            sink: Mutex::new(sink),
        })
    }
}

// =============================================================================
// LOGGER
// =============================================================================

enum Sink {
    Console,
    File(LineWriter<File>),
}

impl Sink {
    fn is_console(&self) -> bool {
        matches!(self, Sink::Console)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Sink::Console => {
                let mut stderr = io::stderr().lock();
                writeln!(stderr, "{}", line)
            }
            Sink::File(writer) => writeln!(writer, "{}", line),
        }
    }
}

/// An activated logger.
///
/// Records below the configured level are accepted and discarded. The
/// logger can be shared across threads; every record is written as a whole
/// line.
pub struct Logger {
    name: String,
    level: Level,
    format: Format,
    colors: LogColors,
    colored: bool,
    sink: Mutex<Sink>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("format", &self.format)
            .field("colored", &self.colored)
            .finish()
    }
}

impl Logger {
    /// Console logger with every default applied.
    pub fn console(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level,
            format: Format::default(),
            colors: LogColors::default(),
            colored: true,
            sink: Mutex::new(Sink::Console),
        }
    }

    /// Logger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum level that is written.
    pub fn level(&self) -> Level {
        self.level
    }

    /// True if records at `level` are written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Records a message at the given level.
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }

        let timestamp = chrono::Local::now().format(LOG_TIME_FORMAT).to_string();
        let line = self.format.render(&timestamp, &self.name, level, &message);
        let line = if self.colored {
            line.style(self.colors.get(level).style()).to_string()
        } else {
            line
        };

        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // A failed write cannot be reported anywhere more useful
        let _ = sink.write_line(&line);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Level::Critical, message);
    }
}

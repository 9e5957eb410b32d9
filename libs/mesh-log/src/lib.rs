//! # Mesh Log
//!
//! Leveled logging for the mesh pipeline scripts.
//!
//! A [`Logger`] is configured through a [`LoggerBuilder`] and activated once
//! with [`LoggerBuilder::launch`]. The activated handle is then passed by
//! reference to every component that reports progress; components accept an
//! `Option<&Logger>` and stay silent when none is given.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mesh_log::{Format, Handler, Level, LoggerBuilder};
//!
//! let logger = LoggerBuilder::new("my_logger", Level::Debug)
//!     .set_format(Format { name: true, join: "|".into(), ..Format::default() })
//!     .launch()?;
//!
//! logger.info("read 12 files from ../src");
//! logger.warning("boundary is not closed");
//!
//! let file_logger = LoggerBuilder::new("my_logger", Level::Info)
//!     .set_handler(Handler::file("log.txt"))
//!     .launch()?;
//! file_logger.debug("dropped: below the minimum level");
//! # Ok::<(), mesh_log::LogError>(())
//! ```

pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod settings;

pub use error::LogError;
pub use format::{Color, ColorSpec, Format, LogColors};
pub use level::Level;
pub use logger::{Handler, Logger, LoggerBuilder};
pub use settings::LoggerSettings;

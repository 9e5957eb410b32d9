//! # Format Selection

use std::fmt;
use std::path::Path;

use config::constants::{OBJ_EXTENSION, OFF_EXTENSION};
use mesh_log::Logger;

use crate::IoError;

/// Mesh formats accepted for sampling and plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    Off,
    Obj,
}

impl MeshFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            MeshFormat::Off => OFF_EXTENSION,
            MeshFormat::Obj => OBJ_EXTENSION,
        }
    }

    /// Format named by the path's extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            OFF_EXTENSION => Some(MeshFormat::Off),
            OBJ_EXTENSION => Some(MeshFormat::Obj),
            _ => None,
        }
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Fails with [`IoError::FormatMismatch`] unless `path` ends in `.{extension}`.
///
/// The mismatch is also reported at error level when a logger is given.
pub fn require_extension(
    path: &Path,
    extension: &'static str,
    logger: Option<&Logger>,
) -> Result<(), IoError> {
    if path.extension().and_then(|e| e.to_str()) == Some(extension) {
        return Ok(());
    }

    let err = IoError::FormatMismatch {
        path: path.to_path_buf(),
        expected: extension,
    };
    if let Some(logger) = logger {
        logger.error(&err);
    }
    Err(err)
}

//! # IO Errors
//!
//! Error types for reading and writing pipeline files.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing pipeline files.
#[derive(Debug, Error)]
pub enum IoError {
    /// The file could not be opened or read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be created or written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file name does not carry the extension of the requested format
    #[error("{} is not an .{expected} file", .path.display())]
    FormatMismatch {
        path: PathBuf,
        expected: &'static str,
    },

    /// Malformed file content
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The OBJ loader rejected the file
    #[error("Failed to load {}: {source}", .path.display())]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    /// Valid file using a feature this crate does not handle
    #[error("Unsupported: {message}")]
    Unsupported { message: String },

    /// A face points past the end of the vertex list
    #[error("Face {face} references vertex {index} but the mesh has {count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        count: usize,
    },

    /// Directory traversal failed
    #[error("Failed to list {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl IoError {
    /// Creates a read error.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a write error.
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a parse error at a 1-based line number.
    pub fn parse(path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    /// Creates an unsupported-feature error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mismatch_display() {
        let err = IoError::FormatMismatch {
            path: PathBuf::from("mesh.stl"),
            expected: "off",
        };
        assert_eq!(err.to_string(), "mesh.stl is not an .off file");
    }

    #[test]
    fn test_parse_display() {
        let err = IoError::parse(Path::new("a.obj"), 7, "bad vertex");
        assert_eq!(err.to_string(), "a.obj:7: bad vertex");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IoError>();
    }
}

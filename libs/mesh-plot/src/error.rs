//! # Plot Errors

use std::path::{Path, PathBuf};

use mesh_gen::GenError;
use mesh_io::IoError;
use thiserror::Error;

/// Errors that can occur while preparing or exporting a plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A results or output file could not be accessed
    #[error("Failed to access {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed results table
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The table has fewer columns than a field needs
    #[error("Column {column} requested but the table has {available} columns")]
    MissingColumn { column: usize, available: usize },

    /// Quantity length matches neither vertices nor faces
    #[error("Quantity '{name}' has {len} values; mesh has {vertices} vertices and {faces} faces")]
    LengthMismatch {
        name: String,
        len: usize,
        vertices: usize,
        faces: usize,
    },

    /// Unknown colormap name
    #[error("Unknown colormap '{0}'")]
    UnknownColormap(String),

    /// Mesh conversion failed
    #[error(transparent)]
    Gen(#[from] GenError),

    /// Mesh file reading failed
    #[error(transparent)]
    Io(#[from] IoError),
}

impl PlotError {
    /// Creates a file access error.
    pub fn file(path: &Path, source: std::io::Error) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a parse error at a 1-based line.
    pub fn parse(path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }
}

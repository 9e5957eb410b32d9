//! # Generation Errors
//!
//! Error types for geometry modelling and mesh generation.

use mesh_io::IoError;
use thiserror::Error;

/// Errors that can occur while building a geometry model or meshing it.
#[derive(Debug, Error)]
pub enum GenError {
    /// Bounding box of nothing
    #[error("Point cloud is empty")]
    EmptyPointCloud,

    /// Coordinate columns of different lengths
    #[error("Coordinate length mismatch: {xs} x values, {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    /// A polygon needs at least three corners
    #[error("Polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    /// A tag that was never returned by the model
    #[error("Unknown {kind} tag {tag}")]
    UnknownEntity { kind: &'static str, tag: u32 },

    /// A line from a point to itself
    #[error("Line {start} -> {end} has zero length")]
    DegenerateLine { start: u32, end: u32 },

    /// Curve loop whose lines do not chain into a closed wire
    #[error("Invalid curve loop: {message}")]
    InvalidCurveLoop { message: String },

    /// Meshing was requested with entities the mesher has not seen yet
    #[error("Model has unsynchronized entities; call synchronize() before generate()")]
    NotSynchronized,

    /// Only dimensions 0 to 2 can be meshed
    #[error("Cannot generate a mesh of dimension {0}")]
    InvalidDimension(u32),

    /// Mesh size must be a positive finite number
    #[error("Invalid mesh size {0}")]
    InvalidMeshSize(f64),

    /// The triangulator could not complete a surface
    #[error("Triangulation of surface {surface} failed: {message}")]
    Triangulation { surface: u32, message: String },

    /// File error while reading input or writing output
    #[error(transparent)]
    Io(#[from] IoError),
}

impl GenError {
    /// Creates an invalid curve loop error.
    pub fn invalid_loop(message: impl Into<String>) -> Self {
        Self::InvalidCurveLoop {
            message: message.into(),
        }
    }

    /// Creates a triangulation error for a surface.
    pub fn triangulation(surface: u32, message: impl Into<String>) -> Self {
        Self::Triangulation {
            surface,
            message: message.into(),
        }
    }
}

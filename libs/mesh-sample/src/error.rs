//! # Sampling Errors

use std::convert::Infallible;

use mesh_parallel::{ParallelError, TaskError};
use thiserror::Error;

/// Errors that can occur while sampling a mesh.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Every face is degenerate, so no weights can be formed
    #[error("Mesh has zero total area")]
    ZeroArea,

    /// The worker pool could not be started
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// A per-face sampling task did not complete
    #[error("Sampling {0}")]
    Task(#[from] TaskError<Infallible>),
}

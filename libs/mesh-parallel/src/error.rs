//! # Parallel Errors

use thiserror::Error;

/// Errors raised before any task runs.
#[derive(Debug, Error)]
pub enum ParallelError {
    /// The worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

/// Failure of a single task, tagged with the index of its argument.
#[derive(Debug, Error)]
pub enum TaskError<E> {
    /// The function returned an error
    #[error("task {index} failed: {error}")]
    Failed { index: usize, error: E },

    /// The function panicked
    #[error("task {index} panicked: {message}")]
    Panicked { index: usize, message: String },

    /// The worker dropped the task without reporting a result
    #[error("task {index} was lost before reporting a result")]
    Lost { index: usize },
}

impl<E> TaskError<E> {
    /// Index of the argument whose task failed.
    pub fn index(&self) -> usize {
        match self {
            TaskError::Failed { index, .. }
            | TaskError::Panicked { index, .. }
            | TaskError::Lost { index } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_error_display() {
        let err: TaskError<String> = TaskError::Failed {
            index: 3,
            error: "division by zero".to_string(),
        };
        assert_eq!(err.to_string(), "task 3 failed: division by zero");
        assert_eq!(err.index(), 3);

        let err: TaskError<String> = TaskError::Panicked {
            index: 1,
            message: "boom".to_string(),
        };
        assert!(err.to_string().contains("panicked"));
        assert_eq!(err.index(), 1);
    }
}

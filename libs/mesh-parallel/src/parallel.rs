//! # Parallel Map
//!
//! Fan-out of one function over many arguments on a call-local pool.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crossbeam_channel::Receiver;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{ParallelError, TaskError};

type TaskFn<A, T, E> = dyn Fn(A) -> Result<T, E> + Send + Sync;
type TaskOutcome<T, E> = Result<T, TaskError<E>>;

/// A function plus the batch of arguments it is applied to.
///
/// Every argument is handed to its own invocation; invocations share no
/// state and may run in any order.
pub struct Parallel<A, T, E> {
    variable: Vec<A>,
    function: Arc<TaskFn<A, T, E>>,
    workers: Option<usize>,
}

impl<A, T, E> fmt::Debug for Parallel<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parallel")
            .field("tasks", &self.variable.len())
            .field("workers", &self.workers)
            .finish()
    }
}

impl<A, T, E> Parallel<A, T, E>
where
    A: Clone + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a batch from arguments and the function applied to each.
    pub fn new<F>(variable: Vec<A>, function: F) -> Self
    where
        F: Fn(A) -> Result<T, E> + Send + Sync + 'static,
    {
        Self {
            variable,
            function: Arc::new(function),
            workers: None,
        }
    }

    /// Limits the pool to `workers` threads (at least one).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers.max(1));
        self
    }

    /// Replaces the argument batch.
    pub fn set_variable(&mut self, variable: Vec<A>) {
        self.variable = variable;
    }

    /// Replaces the function.
    pub fn set_function<F>(&mut self, function: F)
    where
        F: Fn(A) -> Result<T, E> + Send + Sync + 'static,
    {
        self.function = Arc::new(function);
    }

    /// Number of tasks in the batch.
    pub fn len(&self) -> usize {
        self.variable.len()
    }

    /// True when the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.variable.is_empty()
    }

    /// Pool size used by the next launch.
    pub fn workers(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    /// Runs every task and returns their results lazily, in input order.
    ///
    /// Each call to `next` blocks until that particular task has finished.
    pub fn launch(&self) -> Result<OrderedResults<T, E>, ParallelError> {
        let pool = self.build_pool()?;
        let mut slots = Vec::with_capacity(self.variable.len());

        for (index, arg) in self.variable.iter().cloned().enumerate() {
            let (tx, rx) = crossbeam_channel::bounded(1);
            let function = Arc::clone(&self.function);
            pool.spawn(move || {
                let _ = tx.send(run_task(&*function, index, arg));
            });
            slots.push((index, rx));
        }

        Ok(OrderedResults {
            slots: slots.into_iter(),
            _pool: pool,
        })
    }

    /// Runs every task and collects results as they complete.
    ///
    /// A failed task is printed to standard output and recorded in
    /// [`PartialResults::failures`]; it never aborts the batch.
    #[doc(alias = "lauchBeta")]
    pub fn launch_unordered(&self) -> Result<PartialResults<T, E>, ParallelError>
    where
        E: fmt::Display,
    {
        let pool = self.build_pool()?;
        let (tx, rx) = crossbeam_channel::unbounded();

        for (index, arg) in self.variable.iter().cloned().enumerate() {
            let tx = tx.clone();
            let function = Arc::clone(&self.function);
            pool.spawn(move || {
                let _ = tx.send(run_task(&*function, index, arg));
            });
        }
        drop(tx);

        let mut partial = PartialResults {
            results: Vec::with_capacity(self.variable.len()),
            failures: Vec::new(),
        };
        for outcome in rx.iter() {
            match outcome {
                Ok(value) => partial.results.push(value),
                Err(err) => {
                    println!("Exception occurred: {}", err);
                    partial.failures.push(err);
                }
            }
        }
        Ok(partial)
    }

    fn build_pool(&self) -> Result<ThreadPool, ParallelError> {
        Ok(ThreadPoolBuilder::new()
            .num_threads(self.workers())
            .thread_name(|i| format!("mesh-parallel-{}", i))
            .build()?)
    }
}

fn run_task<A, T, E>(function: &TaskFn<A, T, E>, index: usize, arg: A) -> TaskOutcome<T, E> {
    match panic::catch_unwind(AssertUnwindSafe(|| function(arg))) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(TaskError::Failed { index, error }),
        Err(payload) => Err(TaskError::Panicked {
            index,
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

// =============================================================================
// RESULT CONTAINERS
// =============================================================================

/// Lazy, input-ordered results of [`Parallel::launch`].
///
/// Holds the worker pool alive until the iterator is dropped.
pub struct OrderedResults<T, E> {
    slots: std::vec::IntoIter<(usize, Receiver<TaskOutcome<T, E>>)>,
    _pool: ThreadPool,
}

impl<T, E> Iterator for OrderedResults<T, E> {
    type Item = TaskOutcome<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, rx) = self.slots.next()?;
        Some(rx.recv().unwrap_or(Err(TaskError::Lost { index })))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T, E> ExactSizeIterator for OrderedResults<T, E> {}

/// Completion-ordered results of [`Parallel::launch_unordered`].
#[derive(Debug)]
pub struct PartialResults<T, E> {
    /// Values of the tasks that succeeded, in completion order
    pub results: Vec<T>,
    /// Tasks that failed or panicked
    pub failures: Vec<TaskError<E>>,
}

impl<T, E> PartialResults<T, E> {
    /// Number of successful results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when no task succeeded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Discards the failure list.
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

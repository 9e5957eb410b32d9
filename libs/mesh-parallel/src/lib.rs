//! # Mesh Parallel
//!
//! Runs one function over a batch of independent arguments on a bounded
//! rayon thread pool that lives only for the duration of the call.
//!
//! Two result contracts are offered:
//!
//! - [`Parallel::launch`]: a lazy iterator of results in input order. A
//!   failed task is reported when its slot is consumed, so collecting into
//!   `Result<Vec<_>, _>` fails as a whole.
//! - [`Parallel::launch_unordered`]: results in completion order. Failed
//!   tasks are printed to standard output and set aside; the caller always
//!   gets the partial results.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_parallel::Parallel;
//!
//! let parallel = Parallel::new(vec![(1, 1), (2, 2), (3, 3)], |(x, y): (i32, i32)| {
//!     Ok::<_, String>(x + y)
//! });
//!
//! let sums: Result<Vec<i32>, _> = parallel.launch()?.collect();
//! assert_eq!(sums.unwrap(), vec![2, 4, 6]);
//! # Ok::<(), mesh_parallel::ParallelError>(())
//! ```

pub mod error;
pub mod parallel;

pub use error::{ParallelError, TaskError};
pub use parallel::{OrderedResults, Parallel, PartialResults};

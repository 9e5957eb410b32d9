//! # Mesh Sampling
//!
//! One ordered parallel task per face; per-face point lists are
//! concatenated in face order.

use std::convert::Infallible;

use config::constants::DEFAULT_SAMPLE_POINTS;
use glam::DVec3;
use mesh_io::Mesh;
use mesh_log::Logger;
use mesh_parallel::Parallel;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::area::{allocate_samples, face_areas, face_weights};
use crate::triangle::sample_from_triangle;
use crate::SampleError;

/// Parameters for [`sample_from_mesh`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOptions {
    /// Requested number of points over the whole mesh
    pub total_samples: usize,
    /// Base seed; face `i` draws from a generator seeded with `seed + i`.
    /// `None` uses the thread-local generator.
    pub seed: Option<u64>,
    /// Worker threads; `None` uses the available parallelism
    pub workers: Option<usize>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            total_samples: DEFAULT_SAMPLE_POINTS,
            seed: None,
            workers: None,
        }
    }
}

/// Arguments of one per-face task.
#[derive(Debug, Clone, Copy)]
struct FaceTask {
    face: usize,
    corners: [DVec3; 3],
    count: usize,
}

/// Samples points over the surface of `mesh`, area-weighted per face.
///
/// The number of points returned is the sum of the per-face allocations,
/// which may differ slightly from `options.total_samples`.
pub fn sample_from_mesh(
    mesh: &Mesh,
    logger: Option<&Logger>,
    options: &SampleOptions,
) -> Result<Vec<DVec3>, SampleError> {
    let weights = face_weights(&face_areas(mesh))?;
    let counts = allocate_samples(&weights, options.total_samples);

    let tasks: Vec<FaceTask> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(face, &count)| FaceTask {
            face,
            corners: mesh.face_corners(face),
            count,
        })
        .collect();

    let seed = options.seed;
    let mut parallel = Parallel::new(tasks, move |task: FaceTask| {
        let [p1, p2, p3] = task.corners;
        let points = match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(task.face as u64));
                sample_from_triangle(p1, p2, p3, task.count, &mut rng)
            }
            None => sample_from_triangle(p1, p2, p3, task.count, &mut rand::rng()),
        };
        Ok::<_, Infallible>(points)
    });
    if let Some(workers) = options.workers {
        parallel = parallel.with_workers(workers);
    }

    let mut points = Vec::with_capacity(counts.iter().sum());
    for face_points in parallel.launch()? {
        points.extend(face_points?);
    }

    if let Some(logger) = logger {
        logger.info(format!("sample {} points overall", points.len()));
    }
    Ok(points)
}

//! # Mesh Sample
//!
//! Random points on the surface of a triangle mesh.
//!
//! ## Algorithm Steps
//!
//! 1. Area of every face (half the length of the edge cross product)
//! 2. Weights: area over total area
//! 3. Allocation: `round(weight × total)` per face
//! 4. Barycentric sampling of each face with a nonzero allocation, one
//!    ordered parallel task per face
//! 5. Concatenation of the per-face lists in face order
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mesh_io::{read_off, save_xyz};
//! use mesh_sample::{sample_from_mesh, SampleOptions};
//!
//! let mesh = read_off("car/train/car_0001.off", None)?;
//! let points = sample_from_mesh(&mesh, None, &SampleOptions::default())?;
//! save_xyz("points.xyz", &points, None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod area;
pub mod error;
pub mod sampler;
pub mod triangle;

pub use area::{allocate_samples, double_area, face_areas, face_weights};
pub use error::SampleError;
pub use sampler::{sample_from_mesh, SampleOptions};
pub use triangle::sample_from_triangle;

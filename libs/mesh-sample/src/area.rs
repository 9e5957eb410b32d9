//! # Face Areas and Allocation
//!
//! How many samples each face receives: proportional to its area, rounded
//! per face.

use glam::DVec3;
use mesh_io::Mesh;

use crate::SampleError;

/// Twice the area of triangle `a`, `b`, `c`.
///
/// The square root of the summed squares of the three 2x2 determinants of
/// the edge vectors, i.e. the length of their cross product. Collinear or
/// coincident corners give zero.
#[inline]
pub fn double_area(a: DVec3, b: DVec3, c: DVec3) -> f64 {
    let (u, v) = (b - a, c - a);
    let det_xy = u.x * v.y - u.y * v.x;
    let det_yz = u.y * v.z - u.z * v.y;
    let det_zx = u.z * v.x - u.x * v.z;
    (det_xy * det_xy + det_yz * det_yz + det_zx * det_zx).sqrt()
}

/// Area of every face, in face order.
pub fn face_areas(mesh: &Mesh) -> Vec<f64> {
    (0..mesh.face_count())
        .map(|f| {
            let [a, b, c] = mesh.face_corners(f);
            double_area(a, b, c) / 2.0
        })
        .collect()
}

/// Normalizes areas so they sum to one.
pub fn face_weights(areas: &[f64]) -> Result<Vec<f64>, SampleError> {
    let total: f64 = areas.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return Err(SampleError::ZeroArea);
    }
    Ok(areas.iter().map(|a| a / total).collect())
}

/// `weight × total` rounded to the nearest integer for each face, ties to
/// even.
///
/// Faces are rounded independently, so the allocations may miss `total` by
/// up to half a sample per face.
pub fn allocate_samples(weights: &[f64], total: usize) -> Vec<usize> {
    let total = total as f64;
    weights
        .iter()
        .map(|w| (w * total).round_ties_even() as usize)
        .collect()
}

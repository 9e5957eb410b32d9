//! # Planar Triangulation
//!
//! Triangulates a plane surface given as node rings: one outer ring and
//! any number of hole rings, all in the xy plane.
//!
//! ## Algorithm Steps
//!
//! 1. Orient the outer ring counter-clockwise and every hole clockwise
//! 2. Bridge each hole into the outer ring through a mutually visible pair
//!    of vertices, giving one weakly simple polygon
//! 3. Ear-clip the merged polygon
//! 4. Flip interior edges until every edge is locally Delaunay; ring edges
//!    are never flipped, so every boundary segment stays a triangle edge
//!
//! No interior nodes are inserted. Orientation and circle tests use the
//! adaptive exact predicates of the `robust` crate.

mod bridge;
mod ear;
mod flip;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use glam::{DVec2, DVec3};
use robust::Coord;

/// Node indices around a closed loop, first node not repeated.
pub(crate) type Ring = Vec<usize>;

/// Triangulates the region bounded by `rings[0]` minus the holes
/// `rings[1..]`. Returned triangles are counter-clockwise node triples.
pub(crate) fn triangulate_rings(nodes: &[DVec3], rings: &[Ring]) -> Result<Vec<[usize; 3]>, String> {
    let points: Vec<DVec2> = nodes.iter().map(|p| p.truncate()).collect();

    let (outer, holes) = rings
        .split_first()
        .ok_or_else(|| "surface has no curve loop".to_string())?;
    if let Some(ring) = rings.iter().find(|r| r.len() < 3) {
        return Err(format!("curve loop with {} nodes", ring.len()));
    }

    let outer = oriented(outer, &points, true);
    let holes: Vec<Ring> = holes.iter().map(|h| oriented(h, &points, false)).collect();

    let merged = bridge::merge_holes(&points, outer, holes)?;
    let mut triangles = ear::clip(&points, &merged)?;

    let constrained = ring_edges(rings);
    flip::make_delaunay(&points, &mut triangles, &constrained);
    Ok(triangles)
}

/// Copy of `ring` turned counter-clockwise (`ccw`) or clockwise.
fn oriented(ring: &[usize], points: &[DVec2], ccw: bool) -> Ring {
    let mut ring = ring.to_vec();
    if (signed_area(&ring, points) > 0.0) != ccw {
        ring.reverse();
    }
    ring
}

/// Shoelace area; positive for counter-clockwise rings.
pub(crate) fn signed_area(ring: &[usize], points: &[DVec2]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| points[ring[i]].perp_dot(points[ring[(i + 1) % n]]))
        .sum::<f64>()
        / 2.0
}

/// Undirected edges of all rings, stored with the smaller index first.
fn ring_edges(rings: &[Ring]) -> HashSet<(usize, usize)> {
    rings
        .iter()
        .flat_map(|ring| {
            let n = ring.len();
            (0..n).map(move |i| undirected(ring[i], ring[(i + 1) % n]))
        })
        .collect()
}

#[inline]
pub(crate) fn undirected(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// =============================================================================
// Predicates
// =============================================================================

#[inline]
fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Positive when `a`, `b`, `c` turn counter-clockwise, zero when collinear.
#[inline]
pub(crate) fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    robust::orient2d(coord(a), coord(b), coord(c))
}

/// Positive when `d` lies strictly inside the circle through the
/// counter-clockwise triangle `a`, `b`, `c`.
#[inline]
pub(crate) fn in_circle(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> f64 {
    robust::incircle(coord(a), coord(b), coord(c), coord(d))
}

/// Inside or on the boundary of the counter-clockwise triangle `a`, `b`, `c`.
#[inline]
pub(crate) fn in_triangle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    orient(a, b, p) >= 0.0 && orient(b, c, p) >= 0.0 && orient(c, a, p) >= 0.0
}

/// For `p` collinear with `a` and `b`: whether it lies between them.
#[inline]
pub(crate) fn within_segment(a: DVec2, b: DVec2, p: DVec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

//! Ear clipping of a counter-clockwise, weakly simple ring.

use glam::DVec2;

use super::{in_triangle, orient};

/// Cuts ears off `ring` until three vertices remain.
///
/// Vertices are linked in a circular list so removal is O(1). When a full
/// lap finds no ear, one collinear vertex is dropped without emitting a
/// triangle; if no vertex is collinear either the ring is not simple and
/// clipping fails.
pub(super) fn clip(points: &[DVec2], ring: &[usize]) -> Result<Vec<[usize; 3]>, String> {
    let n = ring.len();
    if n < 3 {
        return Err(format!("ring with {} vertices", n));
    }

    let mut prev: Vec<usize> = (0..n).map(|i| (i + n - 1) % n).collect();
    let mut next: Vec<usize> = (0..n).map(|i| (i + 1) % n).collect();
    let mut alive = n;
    let mut current = 0;
    let mut misses = 0;
    let mut triangles = Vec::with_capacity(n - 2);

    let unlink = |prev: &mut Vec<usize>, next: &mut Vec<usize>, i: usize| {
        let (p, q) = (prev[i], next[i]);
        next[p] = q;
        prev[q] = p;
    };

    while alive > 3 {
        let (p, q) = (prev[current], next[current]);
        if is_ear(points, ring, &next, p, current, q) {
            triangles.push([ring[p], ring[current], ring[q]]);
            unlink(&mut prev, &mut next, current);
            alive -= 1;
            misses = 0;
            current = q;
            continue;
        }

        current = q;
        misses += 1;
        if misses < alive {
            continue;
        }

        // A full lap without an ear
        let collinear = walk(&next, current, alive).find(|&i| {
            let (a, b, c) = (points[ring[prev[i]]], points[ring[i]], points[ring[next[i]]]);
            orient(a, b, c) == 0.0
        });
        match collinear {
            Some(i) => {
                current = next[i];
                unlink(&mut prev, &mut next, i);
                alive -= 1;
                misses = 0;
            }
            None => return Err(format!("no ear found with {} vertices left", alive)),
        }
    }

    let (p, q) = (prev[current], next[current]);
    if orient(points[ring[p]], points[ring[current]], points[ring[q]]) > 0.0 {
        triangles.push([ring[p], ring[current], ring[q]]);
    }
    Ok(triangles)
}

/// Positions of the live list starting at `start`.
fn walk(next: &[usize], start: usize, alive: usize) -> impl Iterator<Item = usize> + '_ {
    std::iter::successors(Some(start), move |&i| Some(next[i])).take(alive)
}

/// Convex at `i` and no other ring vertex in or on the candidate triangle.
fn is_ear(points: &[DVec2], ring: &[usize], next: &[usize], p: usize, i: usize, q: usize) -> bool {
    let (a, b, c) = (points[ring[p]], points[ring[i]], points[ring[q]]);
    if orient(a, b, c) <= 0.0 {
        return false;
    }

    let corners = [ring[p], ring[i], ring[q]];
    let mut k = next[q];
    while k != p {
        let node = ring[k];
        let x = points[node];
        // Bridge duplicates and coincident nodes sit on a corner
        if !corners.contains(&node) && x != a && x != b && x != c && in_triangle(a, b, c, x) {
            return false;
        }
        k = next[k];
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(points: &[DVec2], tri: &[usize; 3]) -> f64 {
        orient(points[tri[0]], points[tri[1]], points[tri[2]]) / 2.0
    }

    #[test]
    fn test_clip_square() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        let tris = clip(&points, &[0, 1, 2, 3]).unwrap();
        assert_eq!(tris.len(), 2);
        let total: f64 = tris.iter().map(|t| area(&points, t)).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clip_concave_l_shape() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(0.0, 2.0),
        ];
        let tris = clip(&points, &[0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(tris.len(), 4);
        assert!(tris.iter().all(|t| area(&points, t) > 0.0));
        let total: f64 = tris.iter().map(|t| area(&points, t)).sum();
        assert!((total - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_nodes_on_edges() {
        // Square with a midpoint on every side
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(0.0, 2.0),
            DVec2::new(0.0, 1.0),
        ];
        let ring: Vec<usize> = (0..8).collect();
        let tris = clip(&points, &ring).unwrap();
        assert_eq!(tris.len(), 6);
        let total: f64 = tris.iter().map(|t| area(&points, t)).sum();
        assert!((total - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_too_short_ring() {
        let points = vec![DVec2::ZERO, DVec2::X];
        assert!(clip(&points, &[0, 1]).is_err());
    }
}

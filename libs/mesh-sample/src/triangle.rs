//! # Triangle Sampling

use glam::DVec3;
use rand::Rng;

/// Draws `count` points inside triangle `p1`, `p2`, `p3`.
///
/// Each point uses three independent uniform draws in `[0, 1)` divided by
/// their sum as barycentric weights. The points are therefore convex
/// combinations of the corners, but they are not uniformly distributed
/// over the triangle: they cluster towards the centroid.
pub fn sample_from_triangle<R>(p1: DVec3, p2: DVec3, p3: DVec3, count: usize, rng: &mut R) -> Vec<DVec3>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|_| {
            let a: f64 = rng.random();
            let b: f64 = rng.random();
            let c: f64 = rng.random();
            let sum = a + b + c;
            if sum == 0.0 {
                return (p1 + p2 + p3) / 3.0;
            }
            (a / sum) * p1 + (b / sum) * p2 + (c / sum) * p3
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Barycentric coordinates of `p` in triangle `a`, `b`, `c`.
    fn barycentric(p: DVec3, a: DVec3, b: DVec3, c: DVec3) -> (f64, f64, f64) {
        let (v0, v1, v2) = (b - a, c - a, p - a);
        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        (1.0 - v - w, v, w)
    }

    #[test]
    fn test_points_are_convex_combinations() {
        let (a, b, c) = (
            DVec3::new(1.0, 0.0, 2.0),
            DVec3::new(4.0, 1.0, -1.0),
            DVec3::new(0.0, 3.0, 0.5),
        );
        let mut rng = StdRng::seed_from_u64(7);
        let points = sample_from_triangle(a, b, c, 500, &mut rng);
        assert_eq!(points.len(), 500);

        for p in points {
            let (u, v, w) = barycentric(p, a, b, c);
            assert!(u >= -1e-9 && v >= -1e-9 && w >= -1e-9);
            assert!((u + v + w - 1.0).abs() < 1e-9);
            // On the triangle's plane
            let normal = (b - a).cross(c - a);
            assert!(normal.dot(p - a).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_from_triangle(DVec3::ZERO, DVec3::X, DVec3::Y, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_points() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            sample_from_triangle(DVec3::ZERO, DVec3::X, DVec3::Y, 10, &mut rng)
        };
        assert_eq!(draw(3), draw(3));
        assert_ne!(draw(3), draw(4));
    }

    #[test]
    fn test_degenerate_triangle_stays_on_segment() {
        let mut rng = StdRng::seed_from_u64(11);
        let points = sample_from_triangle(DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0), 50, &mut rng);
        assert!(points.iter().all(|p| p.y == 0.0 && p.z == 0.0 && (0.0..=2.0).contains(&p.x)));
    }
}

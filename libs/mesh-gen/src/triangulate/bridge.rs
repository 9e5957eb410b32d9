//! Hole elimination.
//!
//! Each hole is cut open along a bridge segment from one of its vertices to
//! a visible vertex of the outer ring. The merged ring walks the bridge
//! twice, so the bridge nodes appear twice in it.

use glam::DVec2;

use super::{orient, within_segment, Ring};

/// Splices every clockwise hole into the counter-clockwise `outer` ring.
///
/// Holes are processed from the rightmost one inward so that later bridges
/// can reach the outer boundary through the channels of earlier ones.
pub(super) fn merge_holes(
    points: &[DVec2],
    outer: Ring,
    mut holes: Vec<Ring>,
) -> Result<Ring, String> {
    holes.sort_by(|a, b| max_x(b, points).total_cmp(&max_x(a, points)));

    let mut ring = outer;
    for k in 0..holes.len() {
        let (hole, pending) = (&holes[k], &holes[k + 1..]);
        ring = bridge_hole(points, &ring, hole, pending)
            .ok_or_else(|| format!("no visible bridge for hole {} of {}", k + 1, holes.len()))?;
    }
    Ok(ring)
}

fn max_x(ring: &[usize], points: &[DVec2]) -> f64 {
    ring.iter()
        .map(|&i| points[i].x)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Tries hole vertices from right to left and outer vertices from nearest
/// to farthest until a clear bridge is found.
fn bridge_hole(points: &[DVec2], ring: &[usize], hole: &[usize], pending: &[Ring]) -> Option<Ring> {
    let mut hole_order: Vec<usize> = (0..hole.len()).collect();
    hole_order.sort_by(|&a, &b| {
        let (pa, pb) = (points[hole[a]], points[hole[b]]);
        pb.x.total_cmp(&pa.x).then(pa.y.total_cmp(&pb.y))
    });

    for m in hole_order {
        let anchor = points[hole[m]];

        let mut candidates: Vec<usize> = (0..ring.len()).collect();
        candidates.sort_by(|&a, &b| {
            let da = points[ring[a]].distance_squared(anchor);
            let db = points[ring[b]].distance_squared(anchor);
            da.total_cmp(&db)
        });

        for i in candidates {
            if points[ring[i]] == anchor {
                continue;
            }
            if !in_wedge(points, ring, i, anchor) {
                continue;
            }
            if is_clear(points, hole[m], ring[i], ring, hole, pending) {
                return Some(splice(ring, i, hole, m));
            }
        }
    }
    None
}

/// Whether `p` lies in the interior angle of the ring at position `i`.
fn in_wedge(points: &[DVec2], ring: &[usize], i: usize, p: DVec2) -> bool {
    let n = ring.len();
    let a = points[ring[(i + n - 1) % n]];
    let b = points[ring[i]];
    let c = points[ring[(i + 1) % n]];

    let left_in = orient(a, b, p) > 0.0;
    let left_out = orient(b, c, p) > 0.0;
    if orient(a, b, c) > 0.0 {
        left_in && left_out
    } else {
        left_in || left_out
    }
}

/// Whether the segment `from`-`to` avoids every ring edge except those that
/// end at one of its own nodes.
fn is_clear(
    points: &[DVec2],
    from: usize,
    to: usize,
    ring: &[usize],
    hole: &[usize],
    pending: &[Ring],
) -> bool {
    std::iter::once(ring)
        .chain(std::iter::once(hole))
        .chain(pending.iter().map(Vec::as_slice))
        .all(|r| {
            let n = r.len();
            (0..n).all(|j| !blocks(points, from, to, r[j], r[(j + 1) % n]))
        })
}

fn blocks(points: &[DVec2], m: usize, v: usize, p: usize, q: usize) -> bool {
    if p == m || p == v || q == m || q == v {
        return false;
    }
    let (pm, pv, pp, pq) = (points[m], points[v], points[p], points[q]);

    let o1 = orient(pm, pv, pp);
    let o2 = orient(pm, pv, pq);
    let o3 = orient(pp, pq, pm);
    let o4 = orient(pp, pq, pv);

    let straddles = |x: f64, y: f64| (x > 0.0 && y < 0.0) || (x < 0.0 && y > 0.0);
    if straddles(o1, o2) && straddles(o3, o4) {
        return true;
    }

    (o1 == 0.0 && within_segment(pm, pv, pp))
        || (o2 == 0.0 && within_segment(pm, pv, pq))
        || (o3 == 0.0 && within_segment(pp, pq, pm))
        || (o4 == 0.0 && within_segment(pp, pq, pv))
}

/// `ring[..=i]`, the hole starting at `m`, back to `m`, then `ring[i..]`.
fn splice(ring: &[usize], i: usize, hole: &[usize], m: usize) -> Ring {
    let mut merged = Vec::with_capacity(ring.len() + hole.len() + 2);
    merged.extend_from_slice(&ring[..=i]);
    merged.extend_from_slice(&hole[m..]);
    merged.extend_from_slice(&hole[..m]);
    merged.push(hole[m]);
    merged.extend_from_slice(&ring[i..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(points: &mut Vec<DVec2>, x0: f64, y0: f64, size: f64) -> Ring {
        let start = points.len();
        points.push(DVec2::new(x0, y0));
        points.push(DVec2::new(x0 + size, y0));
        points.push(DVec2::new(x0 + size, y0 + size));
        points.push(DVec2::new(x0, y0 + size));
        (start..start + 4).collect()
    }

    #[test]
    fn test_splice_visits_bridge_twice() {
        let merged = splice(&[0, 1, 2, 3], 1, &[4, 5, 6], 2);
        assert_eq!(merged, vec![0, 1, 6, 4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_merge_single_hole() {
        let mut points = Vec::new();
        let outer = square(&mut points, 0.0, 0.0, 10.0);
        let mut hole = square(&mut points, 4.0, 4.0, 2.0);
        hole.reverse();

        let merged = merge_holes(&points, outer, vec![hole]).unwrap();
        assert_eq!(merged.len(), 4 + 4 + 2);
        for node in 0..8 {
            assert!(merged.contains(&node));
        }
    }

    #[test]
    fn test_bridge_is_blocked_by_crossing_edge() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(2.0, -1.0),
            DVec2::new(2.0, 1.0),
        ];
        assert!(blocks(&points, 0, 1, 2, 3));
        assert!(!blocks(&points, 0, 2, 1, 3));
    }
}

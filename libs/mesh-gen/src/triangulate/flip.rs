//! Lawson edge flips towards a constrained Delaunay triangulation.

use std::collections::{HashMap, HashSet};

use glam::DVec2;

use super::{in_circle, orient, undirected};

/// Flips non-Delaunay interior edges of counter-clockwise `triangles` in
/// place. Edges in `constrained` are left alone.
///
/// Each flip strictly improves the triangulation under the exact in-circle
/// test, so the loop terminates.
pub(super) fn make_delaunay(
    points: &[DVec2],
    triangles: &mut [[usize; 3]],
    constrained: &HashSet<(usize, usize)>,
) {
    // Directed edge a→b to the triangle that contains it
    let mut owner: HashMap<(usize, usize), usize> = HashMap::with_capacity(triangles.len() * 3);
    for (t, tri) in triangles.iter().enumerate() {
        for k in 0..3 {
            owner.insert((tri[k], tri[(k + 1) % 3]), t);
        }
    }

    let mut stack: Vec<(usize, usize)> = owner
        .keys()
        .filter(|&&(a, b)| a < b && owner.contains_key(&(b, a)))
        .copied()
        .filter(|e| !constrained.contains(e))
        .collect();

    while let Some((a, b)) = stack.pop() {
        let (Some(&t1), Some(&t2)) = (owner.get(&(a, b)), owner.get(&(b, a))) else {
            continue;
        };
        // t1 = (a, b, c) and t2 = (b, a, d)
        let (Some(c), Some(d)) = (opposite(&triangles[t1], a, b), opposite(&triangles[t2], b, a)) else {
            continue;
        };
        let (pa, pb, pc, pd) = (points[a], points[b], points[c], points[d]);

        if in_circle(pa, pb, pc, pd) <= 0.0 {
            continue;
        }
        // The new diagonal c-d must lie inside the quad a, d, b, c
        if orient(pa, pd, pc) <= 0.0 || orient(pd, pb, pc) <= 0.0 {
            continue;
        }

        for (x, y) in [(a, b), (b, c), (c, a), (b, a), (a, d), (d, b)] {
            owner.remove(&(x, y));
        }
        triangles[t1] = [a, d, c];
        triangles[t2] = [d, b, c];
        for (x, y) in [(a, d), (d, c), (c, a)] {
            owner.insert((x, y), t1);
        }
        for (x, y) in [(d, b), (b, c), (c, d)] {
            owner.insert((x, y), t2);
        }

        for (x, y) in [(a, d), (d, b), (b, c), (c, a)] {
            let edge = undirected(x, y);
            if !constrained.contains(&edge) {
                stack.push(edge);
            }
        }
    }
}

/// Third corner of `tri` if it contains the directed edge `a`→`b`.
fn opposite(tri: &[usize; 3], a: usize, b: usize) -> Option<usize> {
    (0..3)
        .find(|&k| tri[k] == a && tri[(k + 1) % 3] == b)
        .map(|k| tri[(k + 2) % 3])
}

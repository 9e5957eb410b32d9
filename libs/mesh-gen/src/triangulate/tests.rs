use super::*;
use approx::assert_relative_eq;

fn nodes(coords: &[(f64, f64)]) -> Vec<DVec3> {
    coords.iter().map(|&(x, y)| DVec3::new(x, y, 0.0)).collect()
}

fn area(nodes: &[DVec3], tri: &[usize; 3]) -> f64 {
    let [a, b, c] = tri.map(|i| nodes[i].truncate());
    orient(a, b, c) / 2.0
}

fn centroid(nodes: &[DVec3], tri: &[usize; 3]) -> DVec2 {
    tri.iter().map(|&i| nodes[i].truncate()).sum::<DVec2>() / 3.0
}

fn has_edge(tris: &[[usize; 3]], a: usize, b: usize) -> bool {
    tris.iter().any(|t| {
        (0..3).any(|k| undirected(t[k], t[(k + 1) % 3]) == undirected(a, b))
    })
}

/// 10 x 10 square with a 2 x 2 square hole at (4, 4).
fn square_with_hole() -> (Vec<DVec3>, Vec<Ring>) {
    let nodes = nodes(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (4.0, 4.0),
        (6.0, 4.0),
        (6.0, 6.0),
        (4.0, 6.0),
    ]);
    (nodes, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]])
}

#[test]
fn test_square_without_hole() {
    let nodes = nodes(&[(0.0, 0.0), (3.0, 0.0), (3.0, 2.0), (0.0, 2.0)]);
    let tris = triangulate_rings(&nodes, &[vec![0, 1, 2, 3]]).unwrap();
    assert_eq!(tris.len(), 2);
    let total: f64 = tris.iter().map(|t| area(&nodes, t)).sum();
    assert_relative_eq!(total, 6.0, epsilon = 1e-12);
}

#[test]
fn test_hole_area_is_excluded() {
    let (nodes, rings) = square_with_hole();
    let tris = triangulate_rings(&nodes, &rings).unwrap();

    // n + 2h - 2 triangles for n vertices and h holes
    assert_eq!(tris.len(), 8);
    assert!(tris.iter().all(|t| area(&nodes, t) > 0.0));
    let total: f64 = tris.iter().map(|t| area(&nodes, t)).sum();
    assert_relative_eq!(total, 96.0, epsilon = 1e-9);
}

#[test]
fn test_no_triangle_inside_hole() {
    let (nodes, rings) = square_with_hole();
    let tris = triangulate_rings(&nodes, &rings).unwrap();
    for t in &tris {
        let c = centroid(&nodes, t);
        let inside_hole = c.x > 4.0 && c.x < 6.0 && c.y > 4.0 && c.y < 6.0;
        assert!(!inside_hole, "triangle {:?} lies in the hole", t);
    }
}

#[test]
fn test_ring_edges_are_kept() {
    let (nodes, rings) = square_with_hole();
    let tris = triangulate_rings(&nodes, &rings).unwrap();
    for ring in &rings {
        for k in 0..ring.len() {
            assert!(has_edge(&tris, ring[k], ring[(k + 1) % ring.len()]));
        }
    }
}

#[test]
fn test_ring_orientation_does_not_matter() {
    let (nodes, _) = square_with_hole();
    let rings = vec![vec![3, 2, 1, 0], vec![7, 6, 5, 4]];
    let tris = triangulate_rings(&nodes, &rings).unwrap();
    let total: f64 = tris.iter().map(|t| area(&nodes, t)).sum();
    assert_relative_eq!(total, 96.0, epsilon = 1e-9);
}

#[test]
fn test_two_holes() {
    let nodes = nodes(&[
        (0.0, 0.0),
        (20.0, 0.0),
        (20.0, 10.0),
        (0.0, 10.0),
        (2.0, 2.0),
        (6.0, 2.0),
        (6.0, 6.0),
        (2.0, 6.0),
        (12.0, 3.0),
        (16.0, 3.0),
        (14.0, 7.0),
    ]);
    let rings = vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9, 10]];
    let tris = triangulate_rings(&nodes, &rings).unwrap();

    let total: f64 = tris.iter().map(|t| area(&nodes, t)).sum();
    assert_relative_eq!(total, 200.0 - 16.0 - 8.0, epsilon = 1e-9);
}

#[test]
fn test_concave_hole() {
    // U-shaped hole opening upwards
    let nodes = nodes(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (3.0, 3.0),
        (7.0, 3.0),
        (7.0, 7.0),
        (6.0, 7.0),
        (6.0, 4.0),
        (4.0, 4.0),
        (4.0, 7.0),
        (3.0, 7.0),
    ]);
    let hole: Ring = (4..12).collect();
    let hole_area = signed_area(&hole, &nodes.iter().map(|p| p.truncate()).collect::<Vec<_>>());
    let tris = triangulate_rings(&nodes, &[vec![0, 1, 2, 3], hole]).unwrap();

    let total: f64 = tris.iter().map(|t| area(&nodes, t)).sum();
    assert_relative_eq!(total, 100.0 - hole_area.abs(), epsilon = 1e-9);
    assert!(tris.iter().all(|t| area(&nodes, t) > 0.0));
}

#[test]
fn test_result_is_locally_delaunay() {
    let nodes = nodes(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (8.0, 0.0),
        (8.0, 3.0),
        (4.0, 3.0),
        (0.0, 3.0),
    ]);
    let rings = vec![vec![0, 1, 2, 3, 4, 5]];
    let tris = triangulate_rings(&nodes, &rings).unwrap();
    let boundary = ring_edges(&rings);
    let points: Vec<DVec2> = nodes.iter().map(|p| p.truncate()).collect();

    for t1 in &tris {
        for t2 in &tris {
            for k in 0..3 {
                let (a, b) = (t1[k], t1[(k + 1) % 3]);
                if boundary.contains(&undirected(a, b)) {
                    continue;
                }
                if let Some(d) = (0..3)
                    .find(|&j| t2[j] == b && t2[(j + 1) % 3] == a)
                    .map(|j| t2[(j + 2) % 3])
                {
                    let c = t1[(k + 2) % 3];
                    assert!(in_circle(points[a], points[b], points[c], points[d]) <= 0.0);
                }
            }
        }
    }
}

#[test]
fn test_empty_ring_list() {
    assert!(triangulate_rings(&[], &[]).is_err());
}

#[test]
fn test_short_ring() {
    let nodes = nodes(&[(0.0, 0.0), (1.0, 0.0)]);
    assert!(triangulate_rings(&nodes, &[vec![0, 1]]).is_err());
}

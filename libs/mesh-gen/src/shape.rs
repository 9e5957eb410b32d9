//! # Boundary Shapes
//!
//! Builds the meshing domain from a boundary point cloud: a padded
//! rectangle with the cloud's polygon cut out of it.

use crate::bbox::{bounding_box, BoxDims};
use crate::geometry::{GeometryModel, LoopTag, SurfaceTag};
use crate::GenError;

/// Adds a closed polygon through `(xs[i], ys[i], 0)` and returns its curve
/// loop.
///
/// One point per coordinate pair, a line between each consecutive pair and a
/// closing line from the last point back to the first.
pub fn add_polygon(model: &mut GeometryModel, xs: &[f64], ys: &[f64]) -> Result<LoopTag, GenError> {
    if xs.len() != ys.len() {
        return Err(GenError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.len() < 3 {
        return Err(GenError::TooFewPoints { count: xs.len() });
    }

    let points: Vec<_> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| model.add_point(x, y, 0.0))
        .collect();

    let mut lines = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        lines.push(model.add_line(pair[0], pair[1])?);
    }
    lines.push(model.add_line(points[points.len() - 1], points[0])?);

    model.add_curve_loop(&lines)
}

/// Adds the padded bounding rectangle of the cloud as the outer loop, the
/// cloud polygon as a hole, and one plane surface over both.
pub fn add_shape(
    model: &mut GeometryModel,
    xs: &[f64],
    ys: &[f64],
    dims: BoxDims,
) -> Result<SurfaceTag, GenError> {
    let corners = bounding_box(xs, ys, dims.x_length, dims.y_length)?;
    let wire = add_polygon(
        model,
        &corners.map(|c| c.x),
        &corners.map(|c| c.y),
    )?;
    let hole = add_polygon(model, xs, ys)?;

    model.add_plane_surface(&[wire, hole])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_polygon_counts() {
        let mut model = GeometryModel::new("poly");
        let tag = add_polygon(&mut model, &[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(tag.get(), 1);
        assert_eq!(model.point_count(), 4);
        assert_eq!(model.line_count(), 4);
        assert_eq!(model.loop_count(), 1);
    }

    #[test]
    fn test_add_polygon_rejects_two_points() {
        let mut model = GeometryModel::new("poly");
        assert!(matches!(
            add_polygon(&mut model, &[0.0, 1.0], &[0.0, 0.0]),
            Err(GenError::TooFewPoints { count: 2 })
        ));
    }

    #[test]
    fn test_add_shape_uses_two_loops() {
        let mut model = GeometryModel::new("shape");
        let xs = [0.0, 10.0, 10.0, 0.0, -2.0];
        let ys = [0.0, 0.0, 5.0, 5.0, 2.5];
        let surface = add_shape(&mut model, &xs, &ys, BoxDims::default()).unwrap();

        assert_eq!(surface.get(), 1);
        assert_eq!(model.loop_count(), 2);
        assert_eq!(model.point_count(), 4 + xs.len());
        assert_eq!(model.line_count(), 4 + xs.len());
        assert_eq!(model.surface_count(), 1);
    }

    #[test]
    fn test_add_shape_empty_cloud() {
        let mut model = GeometryModel::new("shape");
        assert!(matches!(
            add_shape(&mut model, &[], &[], BoxDims::default()),
            Err(GenError::EmptyPointCloud)
        ));
    }
}

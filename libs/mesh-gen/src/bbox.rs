//! # Padded Bounding Box
//!
//! The outer rectangle of the generated domain. It is centred horizontally
//! on the point cloud, sits one unit below its lowest point and is exactly
//! `x_length` wide and `y_length` tall.

use config::constants::{BOTTOM_MARGIN, DEFAULT_X_LENGTH, DEFAULT_Y_LENGTH};
use glam::DVec2;

use crate::GenError;

/// Target size of the outer rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDims {
    pub x_length: f64,
    pub y_length: f64,
}

impl Default for BoxDims {
    fn default() -> Self {
        Self {
            x_length: DEFAULT_X_LENGTH,
            y_length: DEFAULT_Y_LENGTH,
        }
    }
}

/// Corners of the padded rectangle around `(xs, ys)`, counter-clockwise
/// from the lower left.
///
/// With `(xmin, xmax, ymin, ymax)` the extent of the points:
///
/// ```text
/// x_offset = (x_length - xmax + xmin) / 2
/// y_offset = y_length - ymax + ymin - 1
/// ```
///
/// and the corners are `(xmin - x_offset, ymin - 1)`,
/// `(xmax + x_offset, ymin - 1)`, `(xmax + x_offset, ymax + y_offset)`,
/// `(xmin - x_offset, ymax + y_offset)`.
///
/// A cloud wider or taller than the target gives negative offsets; the
/// rectangle then cuts through the cloud and no error is raised.
pub fn bounding_box(
    xs: &[f64],
    ys: &[f64],
    x_length: f64,
    y_length: f64,
) -> Result<[DVec2; 4], GenError> {
    if xs.len() != ys.len() {
        return Err(GenError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(GenError::EmptyPointCloud);
    }

    let (xmin, xmax) = extent(xs);
    let (ymin, ymax) = extent(ys);

    let x_offset = (x_length - xmax + xmin) / 2.0;
    let y_offset = y_length - ymax + ymin - BOTTOM_MARGIN;

    let left = xmin - x_offset;
    let right = xmax + x_offset;
    let bottom = ymin - BOTTOM_MARGIN;
    let top = ymax + y_offset;

    Ok([
        DVec2::new(left, bottom),
        DVec2::new(right, bottom),
        DVec2::new(right, top),
        DVec2::new(left, top),
    ])
}

fn extent(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

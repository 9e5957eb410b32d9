//! # Point Cloud

use glam::DVec3;

/// Ordered sequence of 3D points.
///
/// For boundary clouds the `(x, y)` projection is expected to trace a
/// simple closed polygon in order; nothing here checks it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<DVec3>,
}

impl PointCloud {
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// x column.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// y column.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// z column.
    pub fn zs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.z).collect()
    }
}

impl From<Vec<DVec3>> for PointCloud {
    fn from(points: Vec<DVec3>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        let cloud = PointCloud::new(vec![DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.xs(), vec![1.0, 4.0]);
        assert_eq!(cloud.ys(), vec![2.0, 5.0]);
        assert_eq!(cloud.zs(), vec![3.0, 6.0]);
    }
}

use glam::Vec3;
use serde::Serialize;

use crate::traits::FractalCell;

/// Triangle given by three explicit vertices, kept in construction order
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct TriangleCell {
    vertices: [Vec3; 3],
}

impl TriangleCell {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Equilateral triangle with edge `size`, centroid at `center` and apex up
    pub fn equilateral(center: Vec3, size: f32) -> Self {
        let h = 3.0_f32.sqrt() / 2.0 * size;
        Self::new(
            center + Vec3::new(0.0, 2.0 / 3.0 * h, 0.0),
            center + Vec3::new(-size / 2.0, -h / 3.0, 0.0),
            center + Vec3::new(size / 2.0, -h / 3.0, 0.0),
        )
    }

    pub fn corners(&self) -> [Vec3; 3] {
        self.vertices
    }
}

impl FractalCell for TriangleCell {
    fn center(&self) -> Vec3 {
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) / 3.0
    }

    fn size(&self) -> f32 {
        self.vertices[0].distance(self.vertices[1])
    }

    fn vertices(&self) -> Vec<Vec3> {
        self.vertices.to_vec()
    }

    fn triangle_indices(&self) -> &'static [u32] {
        &[0, 1, 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equilateral_edges_match_size() {
        let tri = TriangleCell::equilateral(Vec3::ZERO, 10.0);
        let [a, b, c] = tri.corners();
        assert!((a.distance(b) - 10.0).abs() < 1e-4);
        assert!((b.distance(c) - 10.0).abs() < 1e-4);
        assert!((c.distance(a) - 10.0).abs() < 1e-4);
        assert!(tri.center().length() < 1e-5);
    }

    #[test]
    fn test_derived_center_is_centroid() {
        let tri = TriangleCell::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(tri.center(), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(tri.size(), 3.0);
    }
}

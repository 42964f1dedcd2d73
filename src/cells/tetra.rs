use glam::Vec3;
use serde::Serialize;

use crate::traits::FractalCell;

/// Tetrahedron given by four explicit vertices a, b, c, d
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct TetraCell {
    vertices: [Vec3; 4],
}

impl TetraCell {
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self {
            vertices: [a, b, c, d],
        }
    }

    /// Regular tetrahedron inscribed in a sphere of diameter `size` around `center`
    pub fn regular(center: Vec3, size: f32) -> Self {
        let half = size * 0.5;
        Self::new(
            center + Vec3::new(1.0, 1.0, 1.0).normalize() * half,
            center + Vec3::new(1.0, -1.0, -1.0).normalize() * half,
            center + Vec3::new(-1.0, 1.0, -1.0).normalize() * half,
            center + Vec3::new(-1.0, -1.0, 1.0).normalize() * half,
        )
    }

    pub fn corners(&self) -> [Vec3; 4] {
        self.vertices
    }
}

impl FractalCell for TetraCell {
    fn center(&self) -> Vec3 {
        self.vertices.iter().copied().sum::<Vec3>() / 4.0
    }

    fn size(&self) -> f32 {
        self.vertices[0].distance(self.vertices[1])
    }

    fn vertices(&self) -> Vec<Vec3> {
        self.vertices.to_vec()
    }

    // outward-facing triangles
    fn triangle_indices(&self) -> &'static [u32] {
        &[0, 1, 2, 0, 3, 1, 0, 2, 3, 1, 3, 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_tetra_is_centered() {
        let tetra = TetraCell::regular(Vec3::new(0.0, 1.0, 0.0), 2.0);
        assert!((tetra.center() - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_regular_tetra_edges_are_equal() {
        let tetra = TetraCell::regular(Vec3::ZERO, 3.0);
        let v = tetra.corners();
        let edge = v[0].distance(v[1]);
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert!((v[i].distance(v[j]) - edge).abs() < 1e-4);
            }
        }
        assert!((tetra.size() - edge).abs() < 1e-6);
    }
}

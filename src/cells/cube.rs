use glam::Vec3;
use serde::Serialize;

use crate::traits::FractalCell;

/// 12 triangles, two per face
const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 0, 2, 3, // back (-z)
    4, 6, 5, 4, 7, 6, // front (+z)
    0, 4, 5, 0, 5, 1, // left (-x)
    3, 2, 6, 3, 6, 7, // right (+x)
    0, 3, 7, 0, 7, 4, // bottom (-y)
    1, 5, 6, 1, 6, 2, // top (+y)
];

/// Axis-aligned cube
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CubeCell {
    pub center: Vec3,
    pub size: f32,
}

impl CubeCell {
    pub fn new(center: Vec3, size: f32) -> Self {
        Self { center, size }
    }
}

impl FractalCell for CubeCell {
    fn center(&self) -> Vec3 {
        self.center
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn vertices(&self) -> Vec<Vec3> {
        let h = self.size * 0.5;
        [
            Vec3::new(-h, -h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(-h, h, h),
            Vec3::new(h, h, h),
            Vec3::new(h, -h, h),
        ]
        .iter()
        .map(|offset| self.center + *offset)
        .collect()
    }

    fn triangle_indices(&self) -> &'static [u32] {
        &CUBE_INDICES
    }
}

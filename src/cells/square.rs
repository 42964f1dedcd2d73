use glam::Vec3;
use serde::Serialize;

use crate::traits::FractalCell;

/// Axis-aligned square in the XY plane
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SquareCell {
    pub center: Vec3,
    pub size: f32,
}

impl SquareCell {
    pub fn new(center: Vec3, size: f32) -> Self {
        Self { center, size }
    }
}

impl FractalCell for SquareCell {
    fn center(&self) -> Vec3 {
        self.center
    }

    fn size(&self) -> f32 {
        self.size
    }

    // bottom-left, top-left, top-right, bottom-right
    fn vertices(&self) -> Vec<Vec3> {
        let h = self.size * 0.5;
        vec![
            self.center + Vec3::new(-h, -h, 0.0),
            self.center + Vec3::new(-h, h, 0.0),
            self.center + Vec3::new(h, h, 0.0),
            self.center + Vec3::new(h, -h, 0.0),
        ]
    }

    fn triangle_indices(&self) -> &'static [u32] {
        &[0, 2, 1, 0, 3, 2]
    }
}

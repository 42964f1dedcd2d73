use glam::{IVec2, Vec3};

use crate::math::{PointSequence, AABB};
use crate::traits::CurveGenerator;

const AXIOM: &str = "L";

/// Hilbert curve drawn by walking an L-system on a `2^order` grid stretched
/// over the seed's bounding box. Curve order is `iterations + 1`, so a run
/// yields `4^order` points; the string grows sevenfold per order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hilbert;

/// Rewrites the axiom `order` times with L -> +RF-LFL-FR+ and R -> -LF+RFR+FL-.
pub fn expand_lsystem(order: u32) -> String {
    (0..order).fold(String::from(AXIOM), |current, _| {
        let mut next = String::with_capacity(current.len() * 7);
        for c in current.chars() {
            match c {
                'L' => next.push_str("+RF-LFL-FR+"),
                'R' => next.push_str("-LF+RFR+FL-"),
                other => next.push(other),
            }
        }
        next
    })
}

impl CurveGenerator for Hilbert {
    fn name(&self) -> &str {
        "hilbert"
    }

    fn generate(&self, points: &[Vec3], iterations: u32) -> PointSequence {
        let order = iterations + 1;
        let bounds = if points.len() >= 2 {
            AABB::from_points(points)
        } else {
            None
        }
        .unwrap_or_else(|| AABB::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)));

        let extent = bounds.extent();
        let width = if extent.x <= 0.0 { 1.0 } else { extent.x };
        let height = if extent.y <= 0.0 { 1.0 } else { extent.y };

        let side = 1_i32 << order;
        let dx = width / (side - 1) as f32;
        let dy = height / (side - 1) as f32;
        let to_world = |cell: IVec2| {
            Vec3::new(bounds.min.x + cell.x as f32 * dx, bounds.min.y + cell.y as f32 * dy, 0.0)
        };

        let mut pos = IVec2::ZERO;
        let mut heading = IVec2::X;
        let mut curve = Vec::with_capacity((side * side) as usize);
        curve.push(to_world(pos));

        for symbol in expand_lsystem(order).chars() {
            match symbol {
                'F' => {
                    pos += heading;
                    curve.push(to_world(pos));
                }
                '+' => heading = heading.perp(),
                '-' => heading = -heading.perp(),
                _ => {}
            }
        }

        // half-turn about the box center
        let center = bounds.center();
        for p in &mut curve {
            p.x = 2.0 * center.x - p.x;
            p.y = 2.0 * center.y - p.y;
        }

        curve
    }
}

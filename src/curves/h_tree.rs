use glam::Vec3;

use crate::error::{FractalError, Result};
use crate::math::{PointSequence, DEGENERATE_LENGTH};
use crate::traits::CurveGenerator;

type Segment = (Vec3, Vec3);

/// H-fractal. The input is read as disjoint segments `(0,1), (2,3), ...`;
/// every generation puts a perpendicular segment of half the parent length
/// centered on each endpoint of the previous generation.
///
/// The output is flat pairs: the seed segments first, then each generation
/// in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HTree;

impl HTree {
    fn branch(segment: Segment, index: usize) -> Result<[Segment; 2]> {
        let (a, b) = segment;
        let v = b - a;
        let length = v.length();
        let perp = Vec3::new(-v.y, v.x, 0.0).normalize_or_zero();
        if length <= DEGENERATE_LENGTH || perp == Vec3::ZERO {
            return Err(FractalError::DegenerateSegment { index });
        }

        let half = length * 0.25;
        Ok([(a - perp * half, a + perp * half), (b - perp * half, b + perp * half)])
    }

    fn seed_segments(points: &[Vec3]) -> Vec<Segment> {
        if points.len() % 2 != 0 {
            let err = FractalError::InvalidSeedArity {
                expected: "an even number of points",
                actual: points.len(),
            };
            log::warn!("h-fractal: {}, dropping the last point", err);
        }
        points.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
    }
}

impl CurveGenerator for HTree {
    fn name(&self) -> &str {
        "h"
    }

    fn generate(&self, points: &[Vec3], iterations: u32) -> PointSequence {
        if points.len() < 2 {
            let err = FractalError::InvalidSeedArity {
                expected: "at least 2 points",
                actual: points.len(),
            };
            log::warn!("h-fractal: {}", err);
            return Vec::new();
        }

        let mut current = HTree::seed_segments(points);
        let mut all = current.clone();

        for depth in 1..=iterations {
            let mut next = Vec::with_capacity(current.len() * 2);
            for (index, segment) in current.iter().enumerate() {
                match HTree::branch(*segment, index) {
                    Ok(children) => next.extend_from_slice(&children),
                    Err(err) => log::debug!("h-fractal: skipping {}", err),
                }
            }
            log::debug!("h-fractal: generation {} has {} segments", depth, next.len());

            all.extend_from_slice(&next);
            current = next;
        }

        all.into_iter().flat_map(|(a, b)| [a, b]).collect()
    }
}

use std::f32::consts::TAU;

use glam::Vec3;
use serde::Serialize;

use crate::error::FractalError;
use crate::math::{approx_eq, PointSequence};
use crate::traits::{CellGenerator, Generations};

/// Root radius of the single-strip output
pub const FLAT_ROOT_RADIUS: f32 = 3.0;

const FALLBACK_SEGMENTS: usize = 64;

/// A circle of the packing, before it is drawn with the template
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Disc {
    pub center: Vec3,
    pub radius: f32,
}

/// Circle packing: four third-radius circles centered on the parent's
/// circumference at up, right, down and left. Each circle is drawn by
/// scaling and translating a template loop.
#[derive(Debug, Clone)]
pub struct CirclePacking {
    template: PointSequence,
    template_radius: f32,
    root: Disc,
}

impl CirclePacking {
    pub fn new(template: &[Vec3], root_radius: f32) -> Self {
        let template = if template.len() < 2 {
            let err = FractalError::InvalidSeedArity {
                expected: "at least 2 template points",
                actual: template.len(),
            };
            log::warn!("circle: {}, using a unit circle template", err);
            unit_circle(FALLBACK_SEGMENTS)
        } else {
            template.to_vec()
        };

        let template_radius = template
            .iter()
            .map(|p| p.truncate().length())
            .fold(0.0_f32, f32::max);
        let template_radius = if template_radius <= 0.0 { 1.0 } else { template_radius };

        Self {
            template,
            template_radius,
            root: Disc {
                center: Vec3::ZERO,
                radius: root_radius,
            },
        }
    }

    /// The template placed on `disc`, closed if the template is not
    pub fn draw(&self, disc: &Disc) -> PointSequence {
        let scale = disc.radius / self.template_radius;
        let mut circle: PointSequence = self
            .template
            .iter()
            .map(|p| *p * scale + disc.center)
            .collect();

        if let (Some(first), Some(last)) = (circle.first().copied(), circle.last().copied()) {
            if !approx_eq(first, last) {
                circle.push(first);
            }
        }
        circle
    }
}

impl CellGenerator for CirclePacking {
    type Cell = Disc;

    fn name(&self) -> &str {
        "circle"
    }

    fn root(&self) -> Disc {
        self.root
    }

    fn branching(&self) -> usize {
        4
    }

    fn subdivide(&self, parent: &Disc, out: &mut Vec<Disc>) {
        let radius = parent.radius / 3.0;
        let r = parent.radius;
        for offset in [
            Vec3::new(0.0, r, 0.0),
            Vec3::new(r, 0.0, 0.0),
            Vec3::new(0.0, -r, 0.0),
            Vec3::new(-r, 0.0, 0.0),
        ] {
            out.push(Disc {
                center: parent.center + offset,
                radius,
            });
        }
    }

    /// Depth-first pre-order: each circle is followed by its whole subtree, so
    /// the flat strip connects a circle to its first child. The last
    /// generation comes out in the same order as the breadth-first default.
    fn generate(&self, iterations: u32, generations: Generations) -> Vec<Disc> {
        let mut out = Vec::new();
        let mut stack = vec![(self.root, 0)];
        let mut children = Vec::with_capacity(self.branching());

        while let Some((disc, depth)) = stack.pop() {
            if generations == Generations::All || depth == iterations {
                out.push(disc);
            }
            if depth < iterations {
                children.clear();
                self.subdivide(&disc, &mut children);
                stack.extend(children.iter().rev().map(|child| (*child, depth + 1)));
            }
        }

        log::debug!("{}: {} circles after {} iterations", self.name(), out.len(), iterations);
        out
    }
}

/// Separated-circle output: one closed loop per circle.
pub fn generate_loops(
    template: &[Vec3],
    iterations: u32,
    root_radius: f32,
    generations: Generations,
) -> Vec<PointSequence> {
    let packing = CirclePacking::new(template, root_radius);
    packing
        .generate(iterations, generations)
        .iter()
        .map(|disc| packing.draw(disc))
        .collect()
}

/// Single-strip output with every generation: each closed circle is followed
/// by a repeat of its last point as a separator.
pub fn generate_flat(template: &[Vec3], iterations: u32) -> PointSequence {
    let mut out = Vec::new();
    for circle in generate_loops(template, iterations, FLAT_ROOT_RADIUS, Generations::All) {
        out.extend_from_slice(&circle);
        if let Some(last) = circle.last().copied() {
            out.push(last);
        }
    }
    out
}

fn unit_circle(segments: usize) -> PointSequence {
    let step = TAU / segments as f32;
    let mut points: PointSequence = (0..segments)
        .map(|i| {
            let angle = i as f32 * step;
            Vec3::new(angle.cos(), angle.sin(), 0.0)
        })
        .collect();
    points.push(points[0]);
    points
}

//! Seed point sets for the generators

use std::f32::consts::{PI, TAU};
use std::str::FromStr;

use glam::Vec3;

use crate::error::FractalError;
use crate::math::{rotate_z, PointSequence};

pub const CIRCLE_SEGMENTS: usize = 64;
pub const CIRCLE_RADIUS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Hexagon,
    Square,
    Sierpinski,
    Hilbert,
    Circle,
    Line,
}

impl FromStr for ShapeKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "triangle" => Ok(ShapeKind::Triangle),
            "hexagon" => Ok(ShapeKind::Hexagon),
            "vicsek" | "square" => Ok(ShapeKind::Square),
            "sierpinski" => Ok(ShapeKind::Sierpinski),
            "hilbert" => Ok(ShapeKind::Hilbert),
            "circle" => Ok(ShapeKind::Circle),
            "line" => Ok(ShapeKind::Line),
            _ => Err(FractalError::UnsupportedShapeKind(s.to_string())),
        }
    }
}

impl ShapeKind {
    /// Builds the seed for this shape. `rotation` is in degrees except for
    /// the regular polygons, which start at angle `-PI / rotation`.
    pub fn build(self, size: f32, rotation: f32) -> PointSequence {
        match self {
            ShapeKind::Triangle => polygon(3, size, rotation),
            ShapeKind::Hexagon => polygon(6, size, rotation),
            ShapeKind::Square => square(size, rotation),
            ShapeKind::Sierpinski => equilateral(size, rotation),
            ShapeKind::Hilbert => hilbert_base(size),
            ShapeKind::Circle => circle(rotation),
            ShapeKind::Line => line(size, rotation),
        }
    }
}

/// Seed for `name`; unknown names are an error.
pub fn initial_shape(name: &str, size: f32, rotation: f32) -> Result<PointSequence, FractalError> {
    Ok(name.parse::<ShapeKind>()?.build(size, rotation))
}

/// Seed for `name`, falling back to a triangle when the name is unknown.
pub fn initial_shape_or_triangle(name: &str, size: f32, rotation: f32) -> PointSequence {
    initial_shape(name, size, rotation).unwrap_or_else(|err| {
        log::warn!("{}, falling back to triangle", err);
        ShapeKind::Triangle.build(size, rotation)
    })
}

fn close(mut points: PointSequence) -> PointSequence {
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

// A zero rotation leaves the polygon unrotated instead of dividing by zero.
fn polygon(sides: usize, radius: f32, rotation: f32) -> PointSequence {
    let step = TAU / sides as f32;
    let offset = if rotation == 0.0 { 0.0 } else { PI / rotation };
    let points = (0..sides)
        .map(|i| {
            let angle = i as f32 * step - offset;
            Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
        })
        .collect();
    close(points)
}

/// Square whose corners sit at distance `size` from the origin
fn square(size: f32, rotation: f32) -> PointSequence {
    let half = size.abs() / 2.0_f32.sqrt();
    let rad = rotation.to_radians();
    let points = [
        Vec3::new(-half, -half, 0.0),
        Vec3::new(-half, half, 0.0),
        Vec3::new(half, half, 0.0),
        Vec3::new(half, -half, 0.0),
    ]
    .iter()
    .map(|v| rotate_z(*v, rad))
    .collect();
    close(points)
}

/// Equilateral triangle with circumradius `size`, corners at 90, 210 and 330 degrees
fn equilateral(size: f32, rotation: f32) -> PointSequence {
    let r = size.abs();
    let base = rotation.to_radians();
    let points = [90.0_f32, 210.0, 330.0]
        .iter()
        .map(|deg| {
            let angle = deg.to_radians() + base;
            Vec3::new(angle.cos() * r, angle.sin() * r, 0.0)
        })
        .collect();
    close(points)
}

/// Open "U" visiting the four corners of a `size` box
fn hilbert_base(size: f32) -> PointSequence {
    let half = size / 2.0;
    vec![
        Vec3::new(-half, half, 0.0),
        Vec3::new(-half, -half, 0.0),
        Vec3::new(half, -half, 0.0),
        Vec3::new(half, half, 0.0),
    ]
}

/// Fixed-radius circle template; the generators rescale it.
fn circle(rotation: f32) -> PointSequence {
    let offset = rotation.to_radians();
    let step = TAU / CIRCLE_SEGMENTS as f32;
    let points = (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = offset + i as f32 * step;
            Vec3::new(angle.cos() * CIRCLE_RADIUS, angle.sin() * CIRCLE_RADIUS, 0.0)
        })
        .collect();
    close(points)
}

fn line(size: f32, rotation: f32) -> PointSequence {
    let half = size.abs() * 0.5;
    let rad = rotation.to_radians();
    vec![
        rotate_z(Vec3::new(-half, 0.0, 0.0), rad),
        rotate_z(Vec3::new(half, 0.0, 0.0), rad),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_closed;

    #[test]
    fn test_polygon_vertex_counts() {
        assert_eq!(initial_shape("triangle", 1.0, 6.0).unwrap().len(), 4);
        assert_eq!(initial_shape("hexagon", 1.0, 6.0).unwrap().len(), 7);
        assert!(is_closed(&initial_shape("hexagon", 1.0, 6.0).unwrap()));
    }

    #[test]
    fn test_polygon_zero_rotation_is_finite() {
        let points = initial_shape("triangle", 2.0, 0.0).unwrap();
        assert!(points.iter().all(|p| p.is_finite()));
        assert!((points[0] - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!("HeXaGoN".parse::<ShapeKind>().unwrap(), ShapeKind::Hexagon);
        assert_eq!("square".parse::<ShapeKind>().unwrap(), ShapeKind::Square);
        assert_eq!("vicsek".parse::<ShapeKind>().unwrap(), ShapeKind::Square);
    }

    #[test]
    fn test_unknown_shape_errors() {
        let err = initial_shape("dodecahedron", 1.0, 0.0).unwrap_err();
        assert_eq!(err, FractalError::UnsupportedShapeKind("dodecahedron".into()));
    }

    #[test]
    fn test_unknown_shape_falls_back_to_triangle() {
        let fallback = initial_shape_or_triangle("dodecahedron", 3.0, 6.0);
        assert_eq!(fallback, ShapeKind::Triangle.build(3.0, 6.0));
    }

    #[test]
    fn test_hilbert_base_is_open_u() {
        let points = initial_shape("hilbert", 2.0, 45.0).unwrap();
        assert_eq!(points.len(), 4);
        assert!(!is_closed(&points));
        assert_eq!(points[0], Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(points[3], Vec3::new(1.0, 1.0, 0.0));
    }
}

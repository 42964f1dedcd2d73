use glam::Vec3;

/// Per-component tolerance used to decide whether a polyline is closed.
pub const CLOSE_EPSILON: f32 = 1e-5;

/// Edges or segments shorter than this are skipped by the generators.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Rotates `v` about the Z axis, leaving `z` untouched.
pub fn rotate_z(v: Vec3, radians: f32) -> Vec3 {
    let (s, c) = radians.sin_cos();
    Vec3::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z)
}

pub fn approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < CLOSE_EPSILON
}

/// True when the sequence has at least two points and ends where it starts.
pub fn is_closed(points: &[Vec3]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => approx_eq(*first, *last),
        _ => false,
    }
}

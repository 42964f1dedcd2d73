mod aabb;
mod plane;

pub use aabb::AABB;
pub use plane::{approx_eq, is_closed, rotate_z, CLOSE_EPSILON, DEGENERATE_LENGTH};

/// Ordered polyline; closed when the first and last points coincide.
pub type PointSequence = Vec<glam::Vec3>;

//! Error types for fractal generation

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FractalError>;

/// Conditions the generators detect in their input.
///
/// Geometry errors are recovered where they occur (skip, truncate or fall
/// back to a default seed); only name parsing hands them to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FractalError {
    #[error("unsupported shape kind: {0}")]
    UnsupportedShapeKind(String),

    #[error("unsupported fractal kind: {0}")]
    UnsupportedFractalKind(String),

    #[error("unsupported draw mode: {0}")]
    UnsupportedDrawMode(String),

    #[error("unsupported vicsek pattern: {0}")]
    UnsupportedPattern(String),

    #[error("unsupported generations mode: {0}")]
    UnsupportedGenerations(String),

    /// Edge `index` of the input polyline has near-zero length
    #[error("degenerate edge at index {index}")]
    DegenerateEdge { index: usize },

    /// Segment `index` of the current H-fractal generation has near-zero length
    #[error("degenerate segment at index {index}")]
    DegenerateSegment { index: usize },

    #[error("invalid seed arity: expected {expected}, got {actual}")]
    InvalidSeedArity { expected: &'static str, actual: usize },
}

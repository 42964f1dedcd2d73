pub mod cell;
pub mod curve;
pub mod subdivide;

pub use cell::*;
pub use curve::*;
pub use subdivide::*;

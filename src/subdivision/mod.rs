//! Cell-subdivision generators. Each one starts from a single root cell and
//! replaces every cell of the latest generation with a fixed set of children.

pub mod circle;
mod sierpinski;
mod sierpinski3d;
mod tsquare;
mod tsquare3d;
mod vicsek;
mod vicsek3d;

pub use circle::{CirclePacking, Disc};
pub use sierpinski::{Sierpinski, DEFAULT_TRIANGLE_SIZE};
pub use sierpinski3d::Sierpinski3d;
pub use tsquare::TSquare;
pub use tsquare3d::TSquare3d;
pub use vicsek::{Vicsek, DEFAULT_SQUARE_SIZE};
pub use vicsek3d::{Vicsek3d, VicsekPattern};

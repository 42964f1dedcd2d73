pub mod cells;
pub mod cli;
pub mod config;
pub mod curves;
pub mod dispatch;
pub mod error;
pub mod math;
pub mod mesh;
pub mod shapes;
pub mod subdivision;
pub mod traits;

pub use cells::Cell;
pub use dispatch::{
    dispatch, dispatch_line, generate, DrawMode, FractalKind, FractalSpec, GenerationResult,
};
pub use error::FractalError;
pub use math::PointSequence;
pub use traits::Generations;

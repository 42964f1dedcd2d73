use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cells::cells_to_closed_loops;
use crate::error::FractalError;
use crate::math::PointSequence;
use crate::traits::FractalCell;

/// Which generations a subdivision run returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generations {
    /// Only the cells produced by the last round
    Current,
    /// The root followed by every generation, oldest first
    All,
}

impl FromStr for Generations {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" | "current-only" => Ok(Generations::Current),
            "all" | "accumulate" => Ok(Generations::All),
            _ => Err(FractalError::UnsupportedGenerations(s.to_string())),
        }
    }
}

impl fmt::Display for Generations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generations::Current => write!(f, "current"),
            Generations::All => write!(f, "all"),
        }
    }
}

/// Recursive spatial subdivision with a fixed child-placement rule
pub trait CellGenerator {
    type Cell: Clone;

    /// Generator name for logging
    fn name(&self) -> &str;

    /// Iteration-0 cell
    fn root(&self) -> Self::Cell;

    /// Number of children every parent produces
    fn branching(&self) -> usize;

    /// Append the children of `parent` to `out`
    fn subdivide(&self, parent: &Self::Cell, out: &mut Vec<Self::Cell>);

    /// Grow the root for `iterations` rounds, one generation at a time.
    fn generate(&self, iterations: u32, generations: Generations) -> Vec<Self::Cell> {
        let mut current = vec![self.root()];
        let mut all = match generations {
            Generations::All => current.clone(),
            Generations::Current => Vec::new(),
        };

        for depth in 1..=iterations {
            let mut next = Vec::with_capacity(current.len() * self.branching());
            for cell in &current {
                self.subdivide(cell, &mut next);
            }
            log::debug!("{}: generation {} has {} cells", self.name(), depth, next.len());

            if generations == Generations::All {
                all.extend_from_slice(&next);
            }
            current = next;
        }

        match generations {
            Generations::Current => current,
            Generations::All => all,
        }
    }

    /// Line-mode rendition: every generated cell as a closed loop, concatenated.
    fn generate_polyline(&self, iterations: u32, generations: Generations) -> PointSequence
    where
        Self::Cell: FractalCell,
    {
        cells_to_closed_loops(&self.generate(iterations, generations))
    }
}

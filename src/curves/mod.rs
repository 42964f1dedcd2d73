//! Polyline generators: edge replacement (Koch, Gosper), segment branching
//! (H-fractal) and the L-system Hilbert walk.

mod gosper;
mod h_tree;
mod hilbert;
mod koch;

pub use gosper::Gosper;
pub use h_tree::HTree;
pub use hilbert::{expand_lsystem, Hilbert};
pub use koch::Koch;

use glam::Vec3;

use crate::error::Result;
use crate::math::PointSequence;

/// One replacement round: every edge `(points[i], points[i + 1])` becomes the
/// `N` points returned by `rule`, in edge order, and the final input point is
/// re-appended. Edges the rule rejects are skipped.
fn replace_edges<const N: usize>(
    name: &str,
    points: &[Vec3],
    rule: impl Fn(Vec3, Vec3, usize) -> Result<[Vec3; N]>,
) -> PointSequence {
    let Some(last) = points.last().copied() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(points.len().saturating_sub(1) * N + 1);
    for (index, edge) in points.windows(2).enumerate() {
        match rule(edge[0], edge[1], index) {
            Ok(replacement) => out.extend_from_slice(&replacement),
            Err(err) => log::debug!("{}: skipping {}", name, err),
        }
    }
    out.push(last);
    out
}

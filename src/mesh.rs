use glam::Vec3;
use serde::Serialize;

use crate::dispatch::{DrawMode, GenerationResult};
use crate::math::is_closed;
use crate::traits::FractalCell;

/// Vertex layout for upload to a vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize)]
pub struct MeshVertex {
    pub position: [f32; 3],
}

impl MeshVertex {
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
        }
    }
}

/// Indexed triangle list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// One vertex block per cell in its fixed winding, indices offset per cell
    pub fn from_cells<C: FractalCell>(cells: &[C]) -> Self {
        let mut mesh = MeshData::default();
        for cell in cells {
            let base = mesh.vertices.len() as u32;
            mesh.vertices.extend(cell.vertices().into_iter().map(MeshVertex::new));
            mesh.indices.extend(cell.triangle_indices().iter().map(|i| base + i));
        }
        mesh
    }

    /// Triangle fan from the centroid of a closed polyline, flattened to z = 0.
    /// Open or too-short polylines give `None`.
    pub fn fan(points: &[Vec3]) -> Option<Self> {
        if points.len() < 4 || !is_closed(points) {
            return None;
        }

        let ring: Vec<Vec3> = points[..points.len() - 1]
            .iter()
            .map(|p| Vec3::new(p.x, p.y, 0.0))
            .collect();
        let center = ring.iter().copied().sum::<Vec3>() / ring.len() as f32;

        let mut vertices = Vec::with_capacity(ring.len() + 1);
        vertices.push(MeshVertex::new(center));
        vertices.extend(ring.iter().copied().map(MeshVertex::new));

        let n = ring.len() as u32;
        let mut indices = Vec::with_capacity(ring.len() * 3);
        for i in 1..n {
            indices.extend_from_slice(&[0, i, i + 1]);
        }
        indices.extend_from_slice(&[0, n, 1]);

        Some(Self { vertices, indices })
    }

    /// Mesh for a generation result: cells always, a closed polyline only in
    /// mesh mode. Everything else is drawn as lines.
    pub fn from_result(result: &GenerationResult, mode: DrawMode) -> Option<Self> {
        match (result, mode) {
            (GenerationResult::Cells(cells), _) => Some(Self::from_cells(cells)),
            (GenerationResult::Line(points), DrawMode::Mesh) => {
                let mesh = Self::fan(points);
                if mesh.is_none() {
                    log::warn!("polyline is not closed, drawing it as a line instead");
                }
                mesh
            }
            _ => None,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::{Cell, CubeCell, SquareCell};

    #[test]
    fn test_cells_offset_indices() {
        let cells = [
            SquareCell::new(Vec3::ZERO, 1.0),
            SquareCell::new(Vec3::new(3.0, 0.0, 0.0), 1.0),
        ];
        let mesh = MeshData::from_cells(&cells);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(&mesh.indices[6..], &[4, 6, 5, 4, 7, 6]);
    }

    #[test]
    fn test_mixed_cells() {
        let cells = [
            Cell::from(SquareCell::new(Vec3::ZERO, 1.0)),
            Cell::from(CubeCell::new(Vec3::ZERO, 1.0)),
        ];
        let mesh = MeshData::from_cells(&cells);
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.triangle_count(), 2 + 12);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_fan_over_closed_square() {
        let outline = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ];
        let mesh = MeshData::fan(&outline).unwrap();
        assert_eq!(mesh.vertices[0].position, [1.0, 1.0, 0.0]);
        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(&mesh.indices[9..], &[0, 4, 1]);
    }

    #[test]
    fn test_fan_rejects_open_polyline() {
        assert!(MeshData::fan(&[Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE]).is_none());
    }

    #[test]
    fn test_byte_views() {
        let mesh = MeshData::from_cells(&[SquareCell::new(Vec3::ZERO, 1.0)]);
        assert_eq!(mesh.vertex_bytes().len(), 4 * 12);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
    }
}

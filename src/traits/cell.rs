use glam::Vec3;

/// Immutable geometric unit produced by the subdivision generators
pub trait FractalCell {
    /// Center of the cell (centroid for triangles and tetrahedra)
    fn center(&self) -> Vec3;

    /// Edge length of the cell
    fn size(&self) -> f32;

    /// Vertices in the cell's fixed winding order, without a closing repeat
    fn vertices(&self) -> Vec<Vec3>;

    /// Triangle list indexing into `vertices()`
    fn triangle_indices(&self) -> &'static [u32];
}

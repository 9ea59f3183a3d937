//! # Mesh Data Structures
//!
//! Terrain input meshes and the ribbon meshes the pipeline produces.

use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use shoreline_types::Stage;

use crate::error::{MeshError, MeshResult};

/// A triangle soup describing terrain, in the mesh's local space.
///
/// Triangles are a flat index list with stride 3. Every position carries a
/// normal; the normals decide which side of a cut segment is land.
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::TerrainMesh;
/// use glam::DVec3;
///
/// let mesh = TerrainMesh::with_computed_normals(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Z],
///     vec![0, 2, 1],
/// )
/// .unwrap();
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    indices: Vec<u32>,
}

impl TerrainMesh {
    /// Creates a terrain mesh, checking buffer shapes.
    ///
    /// # Errors
    ///
    /// Fails if `indices.len()` is not a multiple of 3, if an index is out
    /// of range, or if `normals` and `positions` differ in length.
    pub fn new(positions: Vec<DVec3>, normals: Vec<DVec3>, indices: Vec<u32>) -> MeshResult<Self> {
        if normals.len() != positions.len() {
            return Err(MeshError::invalid_input(
                Stage::Intersect,
                format!(
                    "{} normals for {} positions",
                    normals.len(),
                    positions.len()
                ),
            ));
        }
        validate_indices(&indices, positions.len())?;
        Ok(Self {
            positions,
            normals,
            indices,
        })
    }

    /// Creates a terrain mesh and derives area-weighted vertex normals from
    /// its triangles.
    pub fn with_computed_normals(positions: Vec<DVec3>, indices: Vec<u32>) -> MeshResult<Self> {
        validate_indices(&indices, positions.len())?;
        let normals = compute_vertex_normals(&positions, &indices);
        Ok(Self {
            positions,
            normals,
            indices,
        })
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the flat triangle index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((&first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }
}

fn validate_indices(indices: &[u32], vertex_count: usize) -> MeshResult<()> {
    if indices.len() % 3 != 0 {
        return Err(MeshError::invalid_input(
            Stage::Intersect,
            format!("index count {} is not a multiple of 3", indices.len()),
        ));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(MeshError::invalid_input(
            Stage::Intersect,
            format!("index {bad} out of range for {vertex_count} vertices"),
        ));
    }
    Ok(())
}

fn compute_vertex_normals(positions: &[DVec3], indices: &[u32]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let normal = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += normal;
        normals[b] += normal;
        normals[c] += normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }
    normals
}

/// One terrain mesh placed in the world.
///
/// Sources sharing an `id` are the same placed object and are cut once.
#[derive(Debug, Clone, Copy)]
pub struct TerrainSource<'a> {
    /// Host identifier of the placed object
    pub id: u64,
    /// Mesh in local space
    pub mesh: &'a TerrainMesh,
    /// Local-to-world transform
    pub transform: DMat4,
}

impl<'a> TerrainSource<'a> {
    /// Creates a source placed at the world origin.
    pub fn new(id: u64, mesh: &'a TerrainMesh) -> Self {
        Self {
            id,
            mesh,
            transform: DMat4::IDENTITY,
        }
    }

    /// Sets the local-to-world transform.
    pub fn with_transform(mut self, transform: DMat4) -> Self {
        self.transform = transform;
        self
    }
}

/// Exportable strip geometry built from one polyline.
///
/// Vertices are interleaved front/back (`[front0, back0, front1, back1, ..]`)
/// and recentered around `origin`; placing the exported object at `origin`
/// restores world positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RibbonMesh {
    /// Vertex positions relative to `origin`
    pub vertices: Vec<DVec3>,
    /// UV channel 0, one per vertex
    pub uvs: Vec<DVec2>,
    /// Flat triangle index list, stride 3
    pub triangles: Vec<u32>,
    /// World position the vertices were recentered around
    pub origin: DVec3,
}

impl RibbonMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions in world space.
    pub fn world_vertices(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.vertices.iter().map(move |v| *v + self.origin)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - One UV per vertex
    /// - Index list has stride 3 and every index is in range
    /// - No triangle repeats a vertex
    pub fn validate(&self) -> bool {
        if self.uvs.len() != self.vertices.len() || self.triangles.len() % 3 != 0 {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;
        self.triangles.chunks_exact(3).all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_positions() -> Vec<DVec3> {
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_terrain_rejects_bad_stride() {
        let result = TerrainMesh::with_computed_normals(quad_positions(), vec![0, 1]);
        assert!(matches!(result, Err(MeshError::InvalidInput { .. })));
    }

    #[test]
    fn test_terrain_rejects_out_of_range_index() {
        let result = TerrainMesh::with_computed_normals(quad_positions(), vec![0, 1, 4]);
        assert!(result.is_err());
    }

    #[test]
    fn test_terrain_rejects_normal_mismatch() {
        let result = TerrainMesh::new(quad_positions(), vec![DVec3::Y], vec![0, 1, 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_computed_normals_face_up_for_clockwise_from_above() {
        // (0,0,0) -> (0,0,1) -> (1,0,0): cross of edges points along +Y
        let mesh = TerrainMesh::with_computed_normals(quad_positions(), vec![0, 3, 1]).unwrap();
        assert_eq!(mesh.normals()[0], DVec3::Y);
        // Vertex 2 is not referenced by any triangle
        assert_eq!(mesh.normals()[2], DVec3::ZERO);
    }

    #[test]
    fn test_terrain_triangles_and_bounds() {
        let mesh =
            TerrainMesh::with_computed_normals(quad_positions(), vec![0, 3, 1, 1, 3, 2]).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles().nth(1), Some([1, 3, 2]));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_ribbon_mesh_validate() {
        let mut mesh = RibbonMesh {
            vertices: quad_positions(),
            uvs: vec![DVec2::ZERO; 4],
            triangles: vec![0, 3, 2, 1, 3, 0],
            origin: DVec3::ZERO,
        };
        assert!(mesh.validate());
        assert_eq!(mesh.triangle_count(), 2);

        mesh.triangles.push(9);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_ribbon_world_vertices() {
        let mesh = RibbonMesh {
            vertices: vec![DVec3::X],
            uvs: vec![DVec2::ZERO],
            triangles: Vec::new(),
            origin: DVec3::new(0.0, 5.0, 0.0),
        };
        assert_eq!(mesh.world_vertices().next(), Some(DVec3::new(1.0, 5.0, 0.0)));
    }
}

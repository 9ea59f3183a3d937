//! Flat buffer export for mesh exporters and GPU upload.
//!
//! Ribbon meshes are built in `f64`; exporters want flat `f32` arrays.

use crate::mesh::RibbonMesh;

/// Flat mesh buffers handed to an external exporter.
///
/// # Examples
/// ```
/// use shoreline_mesh::{build_ribbon, MeshBuffers, Polyline, RibbonParams};
/// use glam::DVec3;
///
/// let line = Polyline::open(vec![DVec3::ZERO, DVec3::X]);
/// let strip = build_ribbon(&line, &RibbonParams::default()).unwrap();
/// let buffers = strip.mesh.to_mesh_buffers();
///
/// assert_eq!(buffers.positions.len(), 4 * 3); // 4 vertices * 3 components
/// assert_eq!(buffers.uvs.len(), 4 * 2);
/// assert_eq!(buffers.indices.len(), 2 * 3); // 2 triangles * 3 indices
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub positions: Vec<f32>,

    /// UV channel 0 as flat array [u, v, u, v, ...].
    pub uvs: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl From<&RibbonMesh> for MeshBuffers {
    fn from(mesh: &RibbonMesh) -> Self {
        let mut buffers = MeshBuffers {
            positions: Vec::with_capacity(mesh.vertices.len() * 3),
            uvs: Vec::with_capacity(mesh.uvs.len() * 2),
            indices: mesh.triangles.clone(),
        };

        for vertex in &mesh.vertices {
            buffers.positions.push(vertex.x as f32);
            buffers.positions.push(vertex.y as f32);
            buffers.positions.push(vertex.z as f32);
        }

        for uv in &mesh.uvs {
            buffers.uvs.push(uv.x as f32);
            buffers.uvs.push(uv.y as f32);
        }

        buffers
    }
}

impl RibbonMesh {
    /// Exports the mesh to flat `f32` buffers, relative to `origin`.
    pub fn to_mesh_buffers(&self) -> MeshBuffers {
        MeshBuffers::from(self)
    }
}

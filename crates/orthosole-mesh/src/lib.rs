#![warn(missing_docs)]

//! Triangle-mesh construction for the orthosole geometry pipeline.
//!
//! Takes a sampled footprint outline and produces a renderable solid:
//! 1. [`extrude`] sweeps the outline into a capped flat-topped solid
//! 2. [`sculpt`] (optional) remaps the top surface into an anatomical
//!    thickness relief with a heel cup
//! 3. [`recompute_normals`] rebuilds per-vertex lighting normals from
//!    the final triangle geometry
//!
//! The mesh is a plain structure-of-arrays value with no ties to any
//! rendering backend; callers upload the buffers themselves.

mod extrude;
mod normals;
mod relief;

pub use extrude::extrude;
pub use normals::recompute_normals;
pub use relief::{
    heel_cup_depth, profile_height, sculpt, ReliefProfile, HEEL_CUP_DEPTH, HEEL_CUP_EXTENT,
    PROFILE_BREAKPOINTS,
};

/// Output triangle mesh for rendering.
///
/// The index list is fixed once the mesh is created; later pipeline
/// stages rewrite only the position and normal buffers in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
    /// Flat array of vertex normals, parallel to `positions`.
    pub normals: Vec<f32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i` as `[x, y, z]`.
    pub fn position(&self, i: usize) -> [f32; 3] {
        let o = i * 3;
        [self.positions[o], self.positions[o + 1], self.positions[o + 2]]
    }

    /// Normal of vertex `i` as `[nx, ny, nz]`.
    pub fn normal(&self, i: usize) -> [f32; 3] {
        let o = i * 3;
        [self.normals[o], self.normals[o + 1], self.normals[o + 2]]
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

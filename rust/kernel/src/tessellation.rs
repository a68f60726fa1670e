// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-face tessellation output

use nalgebra::{Point3, Vector3};

use crate::shape::Rgb;

/// Triangulated data for a single B-rep face, in the solid's local frame
///
/// Indices are 0-based within this face; the scene layer rebases them when
/// concatenating faces into one buffer per solid. `normals` is either empty
/// or holds exactly one normal per vertex.
#[derive(Debug, Clone, Default)]
pub struct FaceMesh {
    /// Vertex positions (x, y, z), millimeters
    pub positions: Vec<f64>,
    /// Vertex normals (nx, ny, nz), empty when the kernel cannot supply them
    pub normals: Vec<f64>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
    /// Explicit face color, `None` when the document assigns none
    pub color: Option<Rgb>,
}

impl FaceMesh {
    /// Create a new empty face mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position.x);
        self.positions.push(position.y);
        self.positions.push(position.z);

        self.normals.push(normal.x);
        self.normals.push(normal.y);
        self.normals.push(normal.z);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when every vertex has a normal
    #[inline]
    pub fn has_normals(&self) -> bool {
        self.normals.len() == self.positions.len()
    }

    /// Check if the face produced no geometry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

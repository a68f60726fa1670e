// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene output types
//!
//! The import result is a flat mesh list plus a node tree that references
//! meshes by index. Buffers are plain `Vec`s so hosts can hand them to a
//! renderer without another copy.

use brep_lite_kernel::Rgb;

/// Inclusive triangle range covering one source B-rep face
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceRange {
    /// First triangle index of the face
    pub first: i64,
    /// Last triangle index; `first - 1` when the face produced no triangles
    pub last: i64,
    /// Face color; `None` falls back to the mesh color
    pub color: Option<Rgb>,
}

impl FaceRange {
    /// True when the face contributed no triangles
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.last < self.first
    }

    /// Number of triangles covered by this range
    #[inline]
    pub fn triangle_count(&self) -> usize {
        (self.last - self.first + 1).max(0) as usize
    }
}

/// One renderable mesh, corresponding to one solid occurrence
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    /// Occurrence name, possibly empty
    pub name: String,
    /// Uniform mesh color; absent when faces carry their own colors
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub color: Option<Rgb>,
    /// Vertex positions (x, y, z) in the caller's unit, common top-level frame
    pub positions: Vec<f64>,
    /// Vertex normals, present only when every face supplied them
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub normals: Option<Vec<f64>>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
    /// One range per source face, in kernel face order
    pub face_ranges: Vec<FaceRange>,
}

impl Mesh {
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

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Node in the output scene hierarchy
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneNode {
    /// Node name, possibly empty
    pub name: String,
    /// Indices into the result's mesh list
    pub meshes: Vec<u32>,
    /// Child nodes in source document order
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create a node with no meshes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }
}

/// Result of one import call
///
/// Failures never escape the importer as panics or errors; they collapse
/// into `success: false` with a human-readable reason.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportResult {
    /// Whether the import produced a scene
    pub success: bool,
    /// Flat mesh list, empty on failure
    pub meshes: Vec<Mesh>,
    /// Synthetic unnamed root wrapping the document's top-level nodes
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub root: Option<SceneNode>,
    /// Why the import failed, `None` on success
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub failure_reason: Option<String>,
}

impl ImportResult {
    /// Successful result with its mesh list and hierarchy
    pub fn succeeded(meshes: Vec<Mesh>, root: SceneNode) -> Self {
        Self {
            success: true,
            meshes,
            root: Some(root),
            failure_reason: None,
        }
    }

    /// Failed result; the reason is the only payload
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            meshes: Vec::new(),
            root: None,
            failure_reason: Some(reason.into()),
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape hierarchy produced by one kernel parse
//!
//! Mirrors the label tree of the source document: nested nodes with names,
//! explicit colors, local transforms, and attached solid occurrences. The
//! tree is read-only to the scene layer and dropped when the import call
//! returns.

use nalgebra::Matrix4;

/// RGB color triple with components in [0, 1].
/// Absence is always `Option<Rgb>`; black is a real color, not a default.
pub type Rgb = [f64; 3];

/// Complete shape hierarchy from one parsed document
#[derive(Debug, Clone)]
pub struct ShapeTree<S> {
    /// Top-level nodes in document order
    pub roots: Vec<ShapeNode<S>>,
}

impl<S> ShapeTree<S> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// True when the document produced no top-level nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of solid occurrences in the tree.
    /// Every occurrence counts, including repeated instances.
    pub fn solid_count(&self) -> usize {
        fn count<S>(node: &ShapeNode<S>) -> usize {
            node.solids.len() + node.children.iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }
}

impl<S> Default for ShapeTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// One label in the hierarchy
#[derive(Debug, Clone)]
pub struct ShapeNode<S> {
    /// Label name, possibly empty
    pub name: String,
    /// Explicit label color, `None` when the document assigns none
    pub color: Option<Rgb>,
    /// Local transform relative to the parent frame
    pub transform: Matrix4<f64>,
    /// Solid occurrences attached to this label
    pub solids: Vec<SolidEntry<S>>,
    /// Child labels in document order
    pub children: Vec<ShapeNode<S>>,
}

impl<S> ShapeNode<S> {
    /// Create a node with an identity transform and no color
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            transform: Matrix4::identity(),
            solids: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// One solid or shell occurrence attached to a node.
/// The kernel decides what constitutes an occurrence; the scene layer
/// makes exactly one output mesh per entry.
#[derive(Debug, Clone)]
pub struct SolidEntry<S> {
    /// Occurrence name, possibly empty
    pub name: String,
    /// Explicit solid color, `None` when the document assigns none
    pub color: Option<Rgb>,
    /// Opaque kernel handle passed back to `tessellate`
    pub solid: S,
}

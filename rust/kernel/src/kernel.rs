// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry kernel contract
//!
//! The scene layer drives the underlying B-rep kernel through this trait:
//! parse a document into a shape tree, measure it, and triangulate solids
//! one face at a time.

use std::fmt;

use crate::bounds::BoundingBox;
use crate::error::Result;
use crate::shape::ShapeTree;
use crate::tessellation::FaceMesh;

/// Source document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Step,
    Iges,
    Brep,
}

impl Format {
    /// Resolve a format name as host bindings pass it.
    /// Returns `None` for anything but the known lowercase names.
    pub fn from_name(name: &str) -> Option<Format> {
        match name {
            "step" => Some(Format::Step),
            "iges" => Some(Format::Iges),
            "brep" => Some(Format::Brep),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Step => "step",
            Format::Iges => "iges",
            Format::Brep => "brep",
        };
        write!(f, "{}", name)
    }
}

/// Interface to a B-rep geometry kernel
///
/// Implementations own the parsing and discretization mathematics; the
/// scene layer only sees the tree, the bounds, and per-face triangle soup.
pub trait GeometryKernel {
    /// Opaque solid handle stored in the shape tree
    type Solid;

    /// Parse a document into its shape hierarchy.
    /// Geometry and transforms come back in millimeters.
    fn parse(&self, data: &[u8], format: Format) -> Result<ShapeTree<Self::Solid>>;

    /// Bounding box over every solid in the tree, in millimeters.
    /// `None` when the tree holds no measurable geometry.
    fn bounding_box(&self, tree: &ShapeTree<Self::Solid>) -> Option<BoundingBox>;

    /// Triangulate one solid with the given tolerances (millimeters and
    /// radians). Returns one entry per face in a stable kernel order; a
    /// failed face is an `Err` entry, never a failure of the whole call.
    fn tessellate(
        &self,
        solid: &Self::Solid,
        linear_deflection: f64,
        angular_deflection: f64,
    ) -> Vec<Result<FaceMesh>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(Format::from_name("step"), Some(Format::Step));
        assert_eq!(Format::from_name("iges"), Some(Format::Iges));
        assert_eq!(Format::from_name("brep"), Some(Format::Brep));
        assert_eq!(Format::from_name("stl"), None);
        assert_eq!(Format::from_name("STEP"), None);
        assert_eq!(Format::from_name(""), None);
    }

    #[test]
    fn test_format_display_roundtrip() {
        for format in [Format::Step, Format::Iges, Format::Brep] {
            assert_eq!(Format::from_name(&format.to_string()), Some(format));
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # brep-lite Kernel Contract
//!
//! Types and traits shared between a B-rep geometry kernel and the scene
//! layer that drives it.
//!
//! ## Overview
//!
//! A kernel parses STEP/IGES/BREP documents into a [`ShapeTree`]: nested
//! nodes carrying names, explicit colors, local transforms, and attached
//! solid occurrences. The scene layer then asks the kernel to triangulate
//! each solid face by face through [`GeometryKernel::tessellate`] and
//! assembles the flat output buffers itself.
//!
//! All kernel geometry is normalized to millimeters at parse time,
//! regardless of the document's native unit.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use brep_lite_kernel::{Format, GeometryKernel};
//!
//! let tree = kernel.parse(&bytes, Format::Step)?;
//! let bounds = kernel.bounding_box(&tree);
//! for entry in &tree.roots[0].solids {
//!     for face in kernel.tessellate(&entry.solid, 0.1, 0.5) {
//!         // one Result per face; a failed face does not fail the solid
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `fixture`: JSON-driven in-memory kernel for deterministic tests

pub mod bounds;
pub mod error;
pub mod kernel;
pub mod shape;
pub mod tessellation;

#[cfg(feature = "fixture")]
pub mod fixture;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};

pub use bounds::BoundingBox;
pub use error::{Error, Result};
pub use kernel::{Format, GeometryKernel};
pub use shape::{Rgb, ShapeNode, ShapeTree, SolidEntry};
pub use tessellation::FaceMesh;

#[cfg(feature = "fixture")]
pub use fixture::FixtureKernel;

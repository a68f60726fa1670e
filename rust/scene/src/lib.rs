//! brep-lite Scene Assembly
//!
//! Converts parsed B-rep shape trees into renderable triangle-mesh scenes:
//! deflection resolution, per-face buffer concatenation, color inheritance,
//! transform accumulation, and unit-normalized output coordinates.

pub mod assembler;
pub mod color;
pub mod deflection;
pub mod error;
pub mod importer;
pub mod options;
pub mod scene;
pub mod tessellate;
pub mod units;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};

pub use deflection::Tolerances;
pub use error::{Error, Result};
pub use importer::Importer;
pub use options::{ImportOptions, LinearDeflectionType};
pub use scene::{FaceRange, ImportResult, Mesh, SceneNode};
pub use units::LinearUnit;

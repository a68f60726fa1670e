// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON-driven fixture kernel for deterministic tests
//!
//! Parses small JSON documents describing assemblies of boxes and cylinders
//! and tessellates them with predictable topology: a box is always 6 faces
//! of 2 triangles, a cylinder derives its segment count from the resolved
//! tolerances. Geometry is normalized to millimeters at parse time, the way
//! a real kernel normalizes document units.
//!
//! Document example:
//!
//! ```json
//! {
//!   "unit": "meter",
//!   "nodes": [{
//!     "name": "assembly",
//!     "color": [0.8, 0.2, 0.2],
//!     "translation": [0.1, 0.0, 0.0],
//!     "solids": [{
//!       "name": "part",
//!       "shape": { "type": "box", "size": [0.1, 0.1, 0.1] },
//!       "face_colors": [[1.0, 0.0, 0.0], null, null, null, null, null],
//!       "failing_faces": [2]
//!     }],
//!     "children": []
//!   }]
//! }
//! ```

use std::f64::consts::TAU;

use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use serde::Deserialize;

use crate::bounds::BoundingBox;
use crate::error::{Error, Result};
use crate::kernel::{Format, GeometryKernel};
use crate::shape::{Rgb, ShapeNode, ShapeTree, SolidEntry};
use crate::tessellation::FaceMesh;

/// Hard cap on cylinder segments regardless of tolerances
const MAX_SEGMENTS: usize = 512;

// ---------------------------------------------------------------------------
// Document schema
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct FixtureDoc {
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    nodes: Vec<NodeSpec>,
}

#[derive(Debug, Deserialize)]
struct NodeSpec {
    #[serde(default)]
    name: String,
    #[serde(default)]
    color: Option<Rgb>,
    /// Translation in document units, relative to the parent node
    #[serde(default)]
    translation: Option<[f64; 3]>,
    /// Rotation about the parent Z axis, degrees, applied before translation
    #[serde(default)]
    rotation_z_deg: Option<f64>,
    #[serde(default)]
    solids: Vec<SolidSpec>,
    #[serde(default)]
    children: Vec<NodeSpec>,
}

#[derive(Debug, Deserialize)]
struct SolidSpec {
    #[serde(default)]
    name: String,
    #[serde(default)]
    color: Option<Rgb>,
    shape: ShapeSpec,
    /// Explicit face colors by face index; `null` entries stay uncolored
    #[serde(default)]
    face_colors: Vec<Option<Rgb>>,
    /// Face indices whose tessellation fails with an error
    #[serde(default)]
    failing_faces: Vec<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ShapeSpec {
    /// Axis-aligned box from the origin to `size`
    Box { size: [f64; 3] },
    /// Cylinder around +Z with its base circle at z = 0
    Cylinder { radius: f64, height: f64 },
    /// Solid without faces
    Empty,
}

// ---------------------------------------------------------------------------
// Parsed solid
// ---------------------------------------------------------------------------

/// Solid handle stored in the fixture shape tree, dimensions in millimeters
#[derive(Debug, Clone)]
pub struct FixtureSolid {
    shape: FixtureShape,
    face_colors: Vec<Option<Rgb>>,
    failing_faces: Vec<usize>,
}

#[derive(Debug, Clone)]
enum FixtureShape {
    Box { size: [f64; 3] },
    Cylinder { radius: f64, height: f64 },
    Empty,
}

impl FixtureSolid {
    fn local_bounds(&self) -> Option<BoundingBox> {
        let mut bounds = BoundingBox::new();
        match self.shape {
            FixtureShape::Box { size } => {
                bounds.expand(0.0, 0.0, 0.0);
                bounds.expand(size[0], size[1], size[2]);
            }
            FixtureShape::Cylinder { radius, height } => {
                bounds.expand(-radius, -radius, 0.0);
                bounds.expand(radius, radius, height);
            }
            FixtureShape::Empty => return None,
        }
        Some(bounds)
    }
}

// ---------------------------------------------------------------------------
// Kernel
// ---------------------------------------------------------------------------

/// In-memory geometry kernel backed by JSON fixture documents
#[derive(Debug, Default)]
pub struct FixtureKernel;

impl FixtureKernel {
    /// Create a new fixture kernel
    pub fn new() -> Self {
        Self
    }
}

impl GeometryKernel for FixtureKernel {
    type Solid = FixtureSolid;

    fn parse(&self, data: &[u8], format: Format) -> Result<ShapeTree<FixtureSolid>> {
        let doc: FixtureDoc = serde_json::from_slice(data)
            .map_err(|e| Error::parse(format, e.to_string()))?;

        let scale = match doc.unit.as_deref() {
            None => 1.0,
            Some(name) => document_unit_scale(name)
                .ok_or_else(|| Error::parse(format, format!("unknown document unit: {}", name)))?,
        };

        let roots = doc
            .nodes
            .into_iter()
            .map(|node| build_node(node, scale))
            .collect();
        Ok(ShapeTree { roots })
    }

    fn bounding_box(&self, tree: &ShapeTree<FixtureSolid>) -> Option<BoundingBox> {
        let mut bounds = BoundingBox::new();
        for node in &tree.roots {
            accumulate_bounds(node, &Matrix4::identity(), &mut bounds);
        }
        bounds.is_valid().then_some(bounds)
    }

    fn tessellate(
        &self,
        solid: &FixtureSolid,
        linear_deflection: f64,
        angular_deflection: f64,
    ) -> Vec<Result<FaceMesh>> {
        let faces = match solid.shape {
            FixtureShape::Box { size } => box_faces(size),
            FixtureShape::Cylinder { radius, height } => {
                cylinder_faces(radius, height, linear_deflection, angular_deflection)
            }
            FixtureShape::Empty => Vec::new(),
        };

        faces
            .into_iter()
            .enumerate()
            .map(|(i, mut face)| {
                if solid.failing_faces.contains(&i) {
                    return Err(Error::Tessellation(format!(
                        "fixture face {} is configured to fail",
                        i
                    )));
                }
                face.color = solid.face_colors.get(i).copied().flatten();
                Ok(face)
            })
            .collect()
    }
}

/// Millimeters per document unit
fn document_unit_scale(name: &str) -> Option<f64> {
    match name {
        "millimeter" => Some(1.0),
        "centimeter" => Some(10.0),
        "meter" => Some(1000.0),
        "inch" => Some(25.4),
        "foot" => Some(304.8),
        _ => None,
    }
}

fn build_node(spec: NodeSpec, scale: f64) -> ShapeNode<FixtureSolid> {
    let mut transform = spec
        .rotation_z_deg
        .map(|deg| Rotation3::from_axis_angle(&Vector3::z_axis(), deg.to_radians()).to_homogeneous())
        .unwrap_or_else(Matrix4::identity);

    if let Some([x, y, z]) = spec.translation {
        transform[(0, 3)] = x * scale;
        transform[(1, 3)] = y * scale;
        transform[(2, 3)] = z * scale;
    }

    ShapeNode {
        name: spec.name,
        color: spec.color,
        transform,
        solids: spec
            .solids
            .into_iter()
            .map(|solid| build_solid(solid, scale))
            .collect(),
        children: spec
            .children
            .into_iter()
            .map(|child| build_node(child, scale))
            .collect(),
    }
}

fn build_solid(spec: SolidSpec, scale: f64) -> SolidEntry<FixtureSolid> {
    let shape = match spec.shape {
        ShapeSpec::Box { size } => FixtureShape::Box {
            size: [size[0] * scale, size[1] * scale, size[2] * scale],
        },
        ShapeSpec::Cylinder { radius, height } => FixtureShape::Cylinder {
            radius: radius * scale,
            height: height * scale,
        },
        ShapeSpec::Empty => FixtureShape::Empty,
    };

    SolidEntry {
        name: spec.name,
        color: spec.color,
        solid: FixtureSolid {
            shape,
            face_colors: spec.face_colors,
            failing_faces: spec.failing_faces,
        },
    }
}

fn accumulate_bounds(
    node: &ShapeNode<FixtureSolid>,
    parent: &Matrix4<f64>,
    bounds: &mut BoundingBox,
) {
    let transform = parent * node.transform;
    for entry in &node.solids {
        if let Some(local) = entry.solid.local_bounds() {
            for corner in local.corners() {
                let p = transform.transform_point(&corner);
                bounds.expand(p.x, p.y, p.z);
            }
        }
    }
    for child in &node.children {
        accumulate_bounds(child, &transform, bounds);
    }
}

// ---------------------------------------------------------------------------
// Tessellation
// ---------------------------------------------------------------------------

/// One quad face with an outward normal, triangulated as (0,1,2) (0,2,3)
fn quad(points: [Point3<f64>; 4], normal: Vector3<f64>) -> FaceMesh {
    let mut face = FaceMesh::new();
    for p in points {
        face.add_vertex(p, normal);
    }
    face.add_triangle(0, 1, 2);
    face.add_triangle(0, 2, 3);
    face
}

/// Box faces in a fixed order: -Z, +Z, -Y, +Y, -X, +X
fn box_faces(size: [f64; 3]) -> Vec<FaceMesh> {
    let [sx, sy, sz] = size;
    let p = |x, y, z| Point3::new(x, y, z);
    vec![
        quad(
            [p(0.0, 0.0, 0.0), p(0.0, sy, 0.0), p(sx, sy, 0.0), p(sx, 0.0, 0.0)],
            -Vector3::z(),
        ),
        quad(
            [p(0.0, 0.0, sz), p(sx, 0.0, sz), p(sx, sy, sz), p(0.0, sy, sz)],
            Vector3::z(),
        ),
        quad(
            [p(0.0, 0.0, 0.0), p(sx, 0.0, 0.0), p(sx, 0.0, sz), p(0.0, 0.0, sz)],
            -Vector3::y(),
        ),
        quad(
            [p(0.0, sy, 0.0), p(0.0, sy, sz), p(sx, sy, sz), p(sx, sy, 0.0)],
            Vector3::y(),
        ),
        quad(
            [p(0.0, 0.0, 0.0), p(0.0, 0.0, sz), p(0.0, sy, sz), p(0.0, sy, 0.0)],
            -Vector3::x(),
        ),
        quad(
            [p(sx, 0.0, 0.0), p(sx, sy, 0.0), p(sx, sy, sz), p(sx, 0.0, sz)],
            Vector3::x(),
        ),
    ]
}

/// Segment count for a circle of `radius`, honoring both tolerances.
/// The chord of each segment deviates from the arc by at most the linear
/// deflection, and no segment spans more than the angular deflection.
fn segment_count(radius: f64, linear_deflection: f64, angular_deflection: f64) -> usize {
    let sagitta = linear_deflection.min(radius);
    let step_linear = 2.0 * (1.0 - sagitta / radius).acos();
    let step = step_linear.min(angular_deflection).max(1e-3);
    ((TAU / step).ceil() as usize).clamp(3, MAX_SEGMENTS)
}

/// Cylinder faces in a fixed order: side, bottom cap, top cap
fn cylinder_faces(
    radius: f64,
    height: f64,
    linear_deflection: f64,
    angular_deflection: f64,
) -> Vec<FaceMesh> {
    let n = segment_count(radius, linear_deflection, angular_deflection);

    // Side wall: seam vertices duplicated so normals stay per-column
    let mut side = FaceMesh::new();
    for i in 0..=n {
        let angle = TAU * i as f64 / n as f64;
        let (sin, cos) = angle.sin_cos();
        let normal = Vector3::new(cos, sin, 0.0);
        side.add_vertex(Point3::new(radius * cos, radius * sin, 0.0), normal);
        side.add_vertex(Point3::new(radius * cos, radius * sin, height), normal);
    }
    for i in 0..n as u32 {
        let b = 2 * i;
        side.add_triangle(b, b + 2, b + 1);
        side.add_triangle(b + 1, b + 2, b + 3);
    }

    let mut bottom = FaceMesh::new();
    bottom.add_vertex(Point3::new(0.0, 0.0, 0.0), -Vector3::z());
    let mut top = FaceMesh::new();
    top.add_vertex(Point3::new(0.0, 0.0, height), Vector3::z());

    for i in 0..n {
        let angle = TAU * i as f64 / n as f64;
        let (sin, cos) = angle.sin_cos();
        bottom.add_vertex(Point3::new(radius * cos, radius * sin, 0.0), -Vector3::z());
        top.add_vertex(Point3::new(radius * cos, radius * sin, height), Vector3::z());
    }
    for i in 0..n as u32 {
        let next = (i + 1) % n as u32;
        bottom.add_triangle(0, 1 + next, 1 + i);
        top.add_triangle(0, 1 + i, 1 + next);
    }

    vec![side, bottom, top]
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene assembly
//!
//! Walks the kernel shape tree in pre-order, carrying the accumulated
//! transform and the inherited color, and emits one mesh per solid
//! occurrence. Group nodes survive verbatim, instances are expanded into
//! independent meshes, and nothing in the source hierarchy is pruned.

use brep_lite_kernel::{GeometryKernel, Rgb, ShapeNode, ShapeTree, SolidEntry};
use nalgebra::Matrix4;
use tracing::debug;

use crate::color;
use crate::deflection::Tolerances;
use crate::scene::{FaceRange, Mesh, SceneNode};
use crate::tessellate::collect_faces;
use crate::units::LinearUnit;

/// State carried down the hierarchy during traversal
#[derive(Debug, Clone, Copy)]
struct TraversalContext {
    /// Composed transform from the top-level frame to this node
    transform: Matrix4<f64>,
    /// Nearest ancestor color, `None` above the first colored node
    color: Option<Rgb>,
}

impl TraversalContext {
    fn root() -> Self {
        Self {
            transform: Matrix4::identity(),
            color: None,
        }
    }

    fn descend<S>(&self, node: &ShapeNode<S>) -> Self {
        Self {
            transform: self.transform * node.transform,
            color: color::inherit(node.color, self.color),
        }
    }
}

/// Assembles the output scene from a parsed shape tree
pub struct SceneAssembler<'a, K: GeometryKernel> {
    kernel: &'a K,
    tolerances: Tolerances,
    unit: LinearUnit,
    meshes: Vec<Mesh>,
}

impl<'a, K: GeometryKernel> SceneAssembler<'a, K> {
    /// Create an assembler for one import call
    pub fn new(kernel: &'a K, tolerances: Tolerances, unit: LinearUnit) -> Self {
        Self {
            kernel,
            tolerances,
            unit,
            meshes: Vec::new(),
        }
    }

    /// Consume the assembler, returning the mesh list and the scene tree.
    /// The returned root is synthetic and unnamed; the document's top-level
    /// nodes become its children.
    pub fn assemble(mut self, tree: &ShapeTree<K::Solid>) -> (Vec<Mesh>, SceneNode) {
        let context = TraversalContext::root();
        let mut root = SceneNode::new("");
        for node in &tree.roots {
            let child = self.visit_node(node, &context);
            root.children.push(child);
        }

        debug!(
            meshes = self.meshes.len(),
            nodes = root.node_count(),
            "scene assembled"
        );
        (self.meshes, root)
    }

    fn visit_node(&mut self, node: &ShapeNode<K::Solid>, parent: &TraversalContext) -> SceneNode {
        let context = parent.descend(node);

        let mut out = SceneNode::new(node.name.clone());
        for entry in &node.solids {
            let index = self.meshes.len() as u32;
            let mesh = self.emit_mesh(entry, &context);
            self.meshes.push(mesh);
            out.meshes.push(index);
        }
        for child in &node.children {
            let child_node = self.visit_node(child, &context);
            out.children.push(child_node);
        }
        out
    }

    /// Tessellate one solid occurrence into a finished mesh: flat buffers,
    /// world positions in the caller's unit, resolved colors, face ranges.
    fn emit_mesh(&mut self, entry: &SolidEntry<K::Solid>, context: &TraversalContext) -> Mesh {
        let faces =
            self.kernel
                .tessellate(&entry.solid, self.tolerances.linear, self.tolerances.angular);
        let mut buffers = collect_faces(faces);
        buffers.apply_transform(&context.transform);
        buffers.apply_unit_scale(self.unit.scale());

        let solid_color = color::inherit(entry.color, context.color);
        let (mesh_color, range_colors) =
            color::resolve_mesh_colors(solid_color, &buffers.face_colors);

        let face_ranges = buffers
            .spans
            .iter()
            .zip(range_colors)
            .map(|(&(first, last), color)| FaceRange { first, last, color })
            .collect();

        let normals = buffers.normals_complete.then_some(buffers.normals);
        Mesh {
            name: entry.name.clone(),
            color: mesh_color,
            positions: buffers.positions,
            normals,
            indices: buffers.indices,
            face_ranges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brep_lite_kernel::{BoundingBox, Error, FaceMesh, Format, Point3, Result, Vector3};

    /// Minimal kernel whose solids are canned face lists
    struct CannedKernel;

    #[derive(Clone)]
    struct CannedSolid {
        faces: Vec<std::result::Result<FaceMesh, String>>,
    }

    impl GeometryKernel for CannedKernel {
        type Solid = CannedSolid;

        fn parse(&self, _data: &[u8], _format: Format) -> Result<ShapeTree<CannedSolid>> {
            Err(Error::EmptyDocument)
        }

        fn bounding_box(&self, _tree: &ShapeTree<CannedSolid>) -> Option<BoundingBox> {
            None
        }

        fn tessellate(
            &self,
            solid: &CannedSolid,
            _linear_deflection: f64,
            _angular_deflection: f64,
        ) -> Vec<Result<FaceMesh>> {
            solid
                .faces
                .iter()
                .map(|f| match f {
                    Ok(face) => Ok(face.clone()),
                    Err(message) => Err(Error::Tessellation(message.clone())),
                })
                .collect()
        }
    }

    fn triangle() -> FaceMesh {
        let mut face = FaceMesh::new();
        face.add_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::z());
        face.add_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z());
        face.add_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::z());
        face.add_triangle(0, 1, 2);
        face
    }

    fn entry(name: &str, faces: Vec<std::result::Result<FaceMesh, String>>) -> SolidEntry<CannedSolid> {
        SolidEntry {
            name: name.to_string(),
            color: None,
            solid: CannedSolid { faces },
        }
    }

    fn assemble(tree: &ShapeTree<CannedSolid>) -> (Vec<Mesh>, SceneNode) {
        let tolerances = Tolerances { linear: 0.1, angular: 0.5 };
        SceneAssembler::new(&CannedKernel, tolerances, LinearUnit::Millimeter).assemble(tree)
    }

    #[test]
    fn test_synthetic_unnamed_root() {
        let tree = ShapeTree { roots: vec![ShapeNode::new("part")] };
        let (meshes, root) = assemble(&tree);

        assert!(meshes.is_empty());
        assert_eq!(root.name, "");
        assert!(root.meshes.is_empty());
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "part");
    }

    #[test]
    fn test_meshes_indexed_in_preorder() {
        let mut first = ShapeNode::new("first");
        first.solids.push(entry("a", vec![Ok(triangle())]));
        let mut inner = ShapeNode::new("inner");
        inner.solids.push(entry("b", vec![Ok(triangle())]));
        first.children.push(inner);
        let mut second = ShapeNode::new("second");
        second.solids.push(entry("c", vec![Ok(triangle())]));

        let tree = ShapeTree { roots: vec![first, second] };
        let (meshes, root) = assemble(&tree);

        assert_eq!(meshes.len(), 3);
        assert_eq!(meshes[0].name, "a");
        assert_eq!(meshes[1].name, "b");
        assert_eq!(meshes[2].name, "c");
        assert_eq!(root.children[0].meshes, vec![0]);
        assert_eq!(root.children[0].children[0].meshes, vec![1]);
        assert_eq!(root.children[1].meshes, vec![2]);
    }

    #[test]
    fn test_group_nodes_survive_without_meshes() {
        let mut group = ShapeNode::new("group");
        let mut leaf = ShapeNode::new("leaf");
        leaf.solids.push(entry("solid", vec![Ok(triangle())]));
        group.children.push(leaf);

        let tree = ShapeTree { roots: vec![group] };
        let (_, root) = assemble(&tree);

        assert!(root.children[0].meshes.is_empty());
        assert_eq!(root.children[0].children[0].meshes, vec![0]);
    }

    #[test]
    fn test_transforms_accumulate_parent_to_child() {
        let mut parent = ShapeNode::new("parent");
        parent.transform[(0, 3)] = 100.0;
        let mut child = ShapeNode::new("child");
        child.transform[(1, 3)] = 50.0;
        child.solids.push(entry("solid", vec![Ok(triangle())]));
        parent.children.push(child);

        let tree = ShapeTree { roots: vec![parent] };
        let (meshes, _) = assemble(&tree);

        assert_eq!(meshes[0].positions[0], 100.0);
        assert_eq!(meshes[0].positions[1], 50.0);
    }

    #[test]
    fn test_failed_face_recovery_keeps_solid() {
        let tree = ShapeTree {
            roots: vec![{
                let mut node = ShapeNode::new("n");
                node.solids.push(entry(
                    "solid",
                    vec![Ok(triangle()), Err("broken".to_string()), Ok(triangle())],
                ));
                node
            }],
        };
        let (meshes, _) = assemble(&tree);

        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].triangle_count(), 2);
        assert_eq!(meshes[0].face_ranges.len(), 3);
        assert!(meshes[0].face_ranges[1].is_degenerate());
    }

    #[test]
    fn test_solid_without_faces_still_emits_mesh() {
        let tree = ShapeTree {
            roots: vec![{
                let mut node = ShapeNode::new("n");
                node.solids.push(entry("hollow", vec![]));
                node
            }],
        };
        let (meshes, root) = assemble(&tree);

        assert_eq!(meshes.len(), 1);
        assert!(meshes[0].is_empty());
        assert!(meshes[0].face_ranges.is_empty());
        assert_eq!(root.children[0].meshes, vec![0]);
    }

    #[test]
    fn test_node_color_inherited_into_mesh() {
        let red: Rgb = [1.0, 0.0, 0.0];
        let mut parent = ShapeNode::new("parent");
        parent.color = Some(red);
        let mut child = ShapeNode::new("child");
        child.solids.push(entry("solid", vec![Ok(triangle())]));
        parent.children.push(child);

        let tree = ShapeTree { roots: vec![parent] };
        let (meshes, _) = assemble(&tree);

        assert_eq!(meshes[0].color, Some(red));
        assert_eq!(meshes[0].face_ranges[0].color, None);
    }
}

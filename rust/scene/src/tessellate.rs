// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tessellation adapter
//!
//! Concatenates per-face kernel output into one flat buffer set per solid,
//! rebasing indices past the vertices already present and recording one
//! inclusive triangle span per face. A face that fails to tessellate is
//! logged and skipped; its span degenerates to `[n, n-1]` so face indexing
//! stays aligned with the kernel's face order.

use brep_lite_kernel::{self as kernel, FaceMesh, Rgb};
use nalgebra::{Matrix4, Point3, Vector3};
use tracing::warn;

/// Flat buffers for one solid plus per-face bookkeeping
#[derive(Debug, Default)]
pub struct SolidBuffers {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f64>,
    /// Vertex normals, tracked only while every face supplies them
    pub normals: Vec<f64>,
    /// Rebased triangle indices
    pub indices: Vec<u32>,
    /// Inclusive triangle spans, one per face in kernel face order
    pub spans: Vec<(i64, i64)>,
    /// Explicit face colors, one per face in kernel face order
    pub face_colors: Vec<Option<Rgb>>,
    /// False as soon as one face came back without a full normal set
    pub normals_complete: bool,
}

impl SolidBuffers {
    /// Create empty buffers
    pub fn new() -> Self {
        Self {
            normals_complete: true,
            ..Default::default()
        }
    }

    /// Append one face, rebasing its indices past the existing vertices.
    /// A face without triangles records the degenerate span by construction.
    pub fn append_face(&mut self, face: &FaceMesh) {
        let vertex_offset = (self.positions.len() / 3) as u32;
        let first = (self.indices.len() / 3) as i64;

        self.positions.extend_from_slice(&face.positions);
        self.normals.extend_from_slice(&face.normals);
        self.indices
            .extend(face.indices.iter().map(|&i| i + vertex_offset));

        if !face.has_normals() {
            self.normals_complete = false;
        }

        let last = (self.indices.len() / 3) as i64 - 1;
        self.spans.push((first, last));
        self.face_colors.push(face.color);
    }

    /// Record a face that contributed nothing (tessellation failure).
    /// Only the degenerate span and an absent color are emitted.
    pub fn append_failed_face(&mut self) {
        let next = (self.indices.len() / 3) as i64;
        self.spans.push((next, next - 1));
        self.face_colors.push(None);
    }

    /// Map positions through the accumulated node transform and rotate
    /// normals through its linear part
    pub fn apply_transform(&mut self, transform: &Matrix4<f64>) {
        if *transform == Matrix4::identity() {
            return;
        }

        self.positions.chunks_exact_mut(3).for_each(|chunk| {
            let p = transform.transform_point(&Point3::new(chunk[0], chunk[1], chunk[2]));
            chunk[0] = p.x;
            chunk[1] = p.y;
            chunk[2] = p.z;
        });

        self.normals.chunks_exact_mut(3).for_each(|chunk| {
            let v = transform.transform_vector(&Vector3::new(chunk[0], chunk[1], chunk[2]));
            let norm = v.norm();
            if norm > 0.0 {
                chunk[0] = v.x / norm;
                chunk[1] = v.y / norm;
                chunk[2] = v.z / norm;
            }
        });
    }

    /// Convert positions from kernel millimeters into the caller's unit.
    /// `scale` is millimeters per output unit.
    pub fn apply_unit_scale(&mut self, scale: f64) {
        if scale == 1.0 {
            return;
        }
        let inverse = 1.0 / scale;
        for position in self.positions.iter_mut() {
            *position *= inverse;
        }
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
}

/// Concatenate the per-face results of one `tessellate` call
pub fn collect_faces(faces: Vec<kernel::Result<FaceMesh>>) -> SolidBuffers {
    let mut buffers = SolidBuffers::new();
    for (face_index, face) in faces.into_iter().enumerate() {
        match face {
            Ok(face) => buffers.append_face(&face),
            Err(err) => {
                warn!(face_index, error = %err, "face tessellation failed, skipping face");
                buffers.append_failed_face();
            }
        }
    }
    buffers
}

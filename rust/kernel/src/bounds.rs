// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model bounds in f64 precision
//!
//! Tracks the extents of parsed geometry in millimeters. The scene layer
//! derives relative tessellation tolerances from the box diagonal.

use nalgebra::Point3;

/// Axis-aligned bounding box in model space (millimeters)
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Point3<f64>,
    /// Maximum corner
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Create new bounds initialized to invalid state
    pub fn new() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    /// Check if bounds are valid (at least one point added)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Expand bounds to include a point
    #[inline]
    pub fn expand(&mut self, x: f64, y: f64, z: f64) {
        self.min.x = self.min.x.min(x);
        self.min.y = self.min.y.min(y);
        self.min.z = self.min.z.min(z);
        self.max.x = self.max.x.max(x);
        self.max.y = self.max.y.max(y);
        self.max.z = self.max.z.max(z);
    }

    /// Expand bounds to include another box
    #[inline]
    pub fn union(&mut self, other: &BoundingBox) {
        if !other.is_valid() {
            return;
        }
        self.expand(other.min.x, other.min.y, other.min.z);
        self.expand(other.max.x, other.max.y, other.max.z);
    }

    /// Diagonal length, zero for invalid bounds
    #[inline]
    pub fn diagonal(&self) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        (self.max - self.min).norm()
    }

    /// The eight corner points, for transforming boxes through a matrix
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

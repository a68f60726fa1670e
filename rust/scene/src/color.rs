// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color resolution
//!
//! Colors are tri-state: explicit, inherited, or absent. Nothing here
//! invents a default; absence flows through to the output so the viewer
//! decides what uncolored geometry looks like.

use brep_lite_kernel::Rgb;

/// Effective color: the explicit color wins, otherwise the inherited one
#[inline]
pub fn inherit(own: Option<Rgb>, inherited: Option<Rgb>) -> Option<Rgb> {
    own.or(inherited)
}

/// Decide the mesh-level color and the per-face-range colors for one solid.
///
/// `face_colors` holds the explicit face colors in face order. Each face's
/// effective color is its explicit color, falling back to the solid's
/// effective color. When every face ends up with the same present color the
/// mesh carries it once and the ranges report `None`; otherwise the mesh
/// stays uncolored and each range carries its own effective color.
///
/// A solid with no faces keeps the solid color at mesh level.
pub fn resolve_mesh_colors(
    solid_color: Option<Rgb>,
    face_colors: &[Option<Rgb>],
) -> (Option<Rgb>, Vec<Option<Rgb>>) {
    let effective: Vec<Option<Rgb>> = face_colors
        .iter()
        .map(|&color| inherit(color, solid_color))
        .collect();

    if effective.is_empty() {
        return (solid_color, Vec::new());
    }

    if let Some(first) = effective[0] {
        if effective.iter().all(|&color| color == Some(first)) {
            return (Some(first), vec![None; effective.len()]);
        }
    }

    (None, effective)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = [1.0, 0.0, 0.0];
    const GREEN: Rgb = [0.0, 1.0, 0.0];
    const BLUE: Rgb = [0.0, 0.0, 1.0];

    #[test]
    fn test_inherit_prefers_own() {
        assert_eq!(inherit(Some(RED), Some(BLUE)), Some(RED));
        assert_eq!(inherit(None, Some(BLUE)), Some(BLUE));
        assert_eq!(inherit(None, None), None);
    }

    #[test]
    fn test_black_is_a_real_color() {
        let black: Rgb = [0.0, 0.0, 0.0];
        assert_eq!(inherit(Some(black), Some(RED)), Some(black));
    }

    #[test]
    fn test_uniform_solid_color_hoisted() {
        let (mesh, ranges) = resolve_mesh_colors(Some(BLUE), &[None, None, None]);
        assert_eq!(mesh, Some(BLUE));
        assert_eq!(ranges, vec![None, None, None]);
    }

    #[test]
    fn test_uniform_face_colors_hoisted() {
        let (mesh, ranges) = resolve_mesh_colors(None, &[Some(GREEN), Some(GREEN)]);
        assert_eq!(mesh, Some(GREEN));
        assert_eq!(ranges, vec![None, None]);
    }

    #[test]
    fn test_mixed_colors_pushed_to_ranges() {
        let (mesh, ranges) = resolve_mesh_colors(Some(BLUE), &[Some(RED), None, None]);
        assert_eq!(mesh, None);
        assert_eq!(ranges, vec![Some(RED), Some(BLUE), Some(BLUE)]);
    }

    #[test]
    fn test_partially_absent_stays_per_face() {
        let (mesh, ranges) = resolve_mesh_colors(None, &[Some(RED), None]);
        assert_eq!(mesh, None);
        assert_eq!(ranges, vec![Some(RED), None]);
    }

    #[test]
    fn test_all_absent_stays_absent() {
        let (mesh, ranges) = resolve_mesh_colors(None, &[None, None]);
        assert_eq!(mesh, None);
        assert_eq!(ranges, vec![None, None]);
    }

    #[test]
    fn test_no_faces_keeps_solid_color() {
        let (mesh, ranges) = resolve_mesh_colors(Some(RED), &[]);
        assert_eq!(mesh, Some(RED));
        assert!(ranges.is_empty());

        let (mesh, _) = resolve_mesh_colors(None, &[]);
        assert_eq!(mesh, None);
    }
}

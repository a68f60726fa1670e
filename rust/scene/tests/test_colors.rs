// Color resolution through full imports: explicit colors, assembly
// inheritance, and the uniform-color hoist to mesh level.

use brep_lite_kernel::{Format, FixtureKernel, Rgb};
use brep_lite_scene::{ImportOptions, Importer};

const RED: Rgb = [1.0, 0.0, 0.0];
const GREEN: Rgb = [0.0, 1.0, 0.0];
const BLUE: Rgb = [0.0, 0.0, 1.0];

fn import(doc: &str) -> brep_lite_scene::ImportResult {
    Importer::new(FixtureKernel::new()).import(
        doc.as_bytes(),
        Format::Step,
        &ImportOptions::default(),
    )
}

#[test]
fn test_solid_color_hoisted_to_mesh() {
    let doc = r#"{"nodes": [{"name": "n", "solids": [{
        "name": "s", "color": [0.0, 0.0, 1.0],
        "shape": {"type": "box", "size": [10, 10, 10]}}]}]}"#;
    let result = import(doc);
    let mesh = &result.meshes[0];

    assert_eq!(mesh.color, Some(BLUE));
    assert_eq!(mesh.face_ranges.len(), 6);
    assert!(mesh.face_ranges.iter().all(|r| r.color.is_none()));
}

#[test]
fn test_node_color_inherited_by_solid() {
    let doc = r#"{"nodes": [{"name": "assembly", "color": [1.0, 0.0, 0.0],
        "children": [{"name": "child", "solids": [{
            "name": "s", "shape": {"type": "box", "size": [10, 10, 10]}}]}]}]}"#;
    let result = import(doc);

    assert_eq!(result.meshes[0].color, Some(RED));
}

#[test]
fn test_explicit_color_overrides_inherited() {
    let doc = r#"{"nodes": [{"name": "assembly", "color": [1.0, 0.0, 0.0],
        "children": [{"name": "child", "color": [0.0, 1.0, 0.0], "solids": [{
            "name": "s", "shape": {"type": "box", "size": [10, 10, 10]}}]}]}]}"#;
    let result = import(doc);

    assert_eq!(result.meshes[0].color, Some(GREEN));
}

#[test]
fn test_solid_color_overrides_node_color() {
    let doc = r#"{"nodes": [{"name": "n", "color": [1.0, 0.0, 0.0], "solids": [{
        "name": "s", "color": [0.0, 1.0, 0.0],
        "shape": {"type": "box", "size": [10, 10, 10]}}]}]}"#;
    let result = import(doc);

    assert_eq!(result.meshes[0].color, Some(GREEN));
}

#[test]
fn test_mixed_face_colors_pushed_to_ranges() {
    let doc = r#"{"nodes": [{"name": "n", "solids": [{
        "name": "s", "color": [0.0, 0.0, 1.0],
        "shape": {"type": "box", "size": [10, 10, 10]},
        "face_colors": [[1.0, 0.0, 0.0], null, null, null, null, null]}]}]}"#;
    let result = import(doc);
    let mesh = &result.meshes[0];

    assert_eq!(mesh.color, None);
    assert_eq!(mesh.face_ranges[0].color, Some(RED));
    for range in &mesh.face_ranges[1..] {
        assert_eq!(range.color, Some(BLUE));
    }
}

#[test]
fn test_uniform_face_colors_hoisted() {
    let doc = r#"{"nodes": [{"name": "n", "solids": [{
        "name": "s",
        "shape": {"type": "box", "size": [10, 10, 10]},
        "face_colors": [[0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0],
                        [0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0]]}]}]}"#;
    let result = import(doc);
    let mesh = &result.meshes[0];

    assert_eq!(mesh.color, Some(GREEN));
    assert!(mesh.face_ranges.iter().all(|r| r.color.is_none()));
}

#[test]
fn test_uncolored_stays_absent() {
    let doc = r#"{"nodes": [{"name": "n", "solids": [{
        "name": "s", "shape": {"type": "box", "size": [10, 10, 10]}}]}]}"#;
    let result = import(doc);
    let mesh = &result.meshes[0];

    assert_eq!(mesh.color, None);
    assert!(mesh.face_ranges.iter().all(|r| r.color.is_none()));
}

#[test]
fn test_partial_face_colors_without_solid_color() {
    let doc = r#"{"nodes": [{"name": "n", "solids": [{
        "name": "s",
        "shape": {"type": "box", "size": [10, 10, 10]},
        "face_colors": [[1.0, 0.0, 0.0]]}]}]}"#;
    let result = import(doc);
    let mesh = &result.meshes[0];

    assert_eq!(mesh.color, None);
    assert_eq!(mesh.face_ranges[0].color, Some(RED));
    assert!(mesh.face_ranges[1..].iter().all(|r| r.color.is_none()));
}

#[test]
fn test_failed_face_keeps_uniform_hoist() {
    let doc = r#"{"nodes": [{"name": "n", "solids": [{
        "name": "s", "color": [0.0, 0.0, 1.0],
        "shape": {"type": "box", "size": [10, 10, 10]},
        "failing_faces": [2]}]}]}"#;
    let result = import(doc);
    let mesh = &result.meshes[0];

    // The failed face has no explicit color, so it inherits the solid blue
    // like its siblings and the hoist still applies
    assert_eq!(mesh.color, Some(BLUE));
    assert!(mesh.face_ranges[2].is_degenerate());
}

#[test]
fn test_empty_solid_carries_solid_color() {
    let doc = r#"{"nodes": [{"name": "n", "solids": [{
        "name": "s", "color": [1.0, 0.0, 0.0], "shape": {"type": "empty"}}]}]}"#;
    let result = import(doc);
    let mesh = &result.meshes[0];

    assert!(mesh.is_empty());
    assert_eq!(mesh.color, Some(RED));
}

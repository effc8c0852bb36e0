// Host-side tests for scene container decoding and named-node scanning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use scene::*;

fn tri(name: &str, base: f32) -> MeshNode {
    MeshNode {
        name: name.to_string(),
        vertices: vec![
            MeshVertex {
                position: [base, 0.0, 0.0],
                uv: [0.0, 0.0],
            },
            MeshVertex {
                position: [base + 1.0, 0.0, 0.0],
                uv: [1.0, 0.0],
            },
            MeshVertex {
                position: [base, 1.0, 0.0],
                uv: [0.0, 1.0],
            },
        ],
        indices: vec![0, 1, 2],
    }
}

fn full_scene() -> SceneData {
    SceneData {
        nodes: vec![
            tri(NODE_BAKED, 0.0),
            tri(NODE_POLE_LIGHT_A, 1.0),
            tri(NODE_POLE_LIGHT_B, 2.0),
            tri(NODE_PORTAL_LIGHT, 3.0),
        ],
    }
}

#[test]
fn encode_decode_roundtrip() {
    let scene = full_scene();
    let bytes = scene.encode();
    let decoded = SceneData::decode(&bytes).expect("decode");
    assert_eq!(decoded, scene);
}

#[test]
fn scan_finds_every_expected_node() {
    let scene = full_scene();
    let slots = NamedMeshes::scan(&scene.nodes);
    assert_eq!(slots.baked, Some(0));
    assert_eq!(slots.pole_light_a, Some(1));
    assert_eq!(slots.pole_light_b, Some(2));
    assert_eq!(slots.portal_light, Some(3));
    assert!(slots.missing().is_empty());
}

#[test]
fn missing_portal_light_is_reported_not_fatal() {
    let scene = SceneData {
        nodes: vec![
            tri(NODE_BAKED, 0.0),
            tri(NODE_POLE_LIGHT_A, 1.0),
            tri(NODE_POLE_LIGHT_B, 2.0),
        ],
    };
    let bytes = scene.encode();
    let decoded = SceneData::decode(&bytes).expect("decode");
    let slots = NamedMeshes::scan(&decoded.nodes);
    assert_eq!(slots.portal_light, None);
    assert_eq!(slots.missing(), vec![NODE_PORTAL_LIGHT]);
}

#[test]
fn unexpected_extra_nodes_are_ignored_by_the_scan() {
    let mut scene = full_scene();
    scene.nodes.push(tri("gravestone", 4.0));
    let slots = NamedMeshes::scan(&scene.nodes);
    assert!(slots.missing().is_empty());
    assert_eq!(slots.portal_light, Some(3));
}

#[test]
fn bad_magic_is_a_typed_error() {
    let mut bytes = full_scene().encode();
    bytes[0..4].copy_from_slice(b"NOPE");
    assert!(matches!(
        SceneData::decode(&bytes),
        Err(SceneError::BadMagic)
    ));
}

#[test]
fn unsupported_version_is_a_typed_error() {
    let mut bytes = full_scene().encode();
    bytes[4..8].copy_from_slice(&99u32.to_le_bytes());
    assert!(matches!(
        SceneData::decode(&bytes),
        Err(SceneError::UnsupportedVersion(99))
    ));
}

#[test]
fn truncated_buffers_are_typed_errors() {
    let bytes = full_scene().encode();

    // Too short for the header at all
    assert!(matches!(
        SceneData::decode(&bytes[..8]),
        Err(SceneError::Truncated)
    ));

    // Header intact but the manifest is cut off
    assert!(matches!(
        SceneData::decode(&bytes[..14]),
        Err(SceneError::Truncated)
    ));

    // Manifest intact but the blob is cut short
    let cut = bytes.len() - 4;
    assert!(matches!(
        SceneData::decode(&bytes[..cut]),
        Err(SceneError::NodeOutOfBounds(_))
    ));
}

#[test]
fn empty_scene_roundtrips() {
    let scene = SceneData::default();
    let decoded = SceneData::decode(&scene.encode()).expect("decode");
    assert!(decoded.nodes.is_empty());
}

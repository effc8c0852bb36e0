// Scene container decoding.
//
// The portal scene ships as one compact binary file: a fixed header, a JSON
// manifest describing named mesh nodes, and a raw blob holding interleaved
// vertex data and u32 indices. The export tooling writes the same layout via
// [`SceneData::encode`].

use serde::{Deserialize, Serialize};

pub const SCENE_MAGIC: [u8; 4] = *b"PSCN";
pub const SCENE_VERSION: u32 = 1;

// Node names assigned by the authoring side; the importer matches on these.
pub const NODE_BAKED: &str = "baked";
pub const NODE_POLE_LIGHT_A: &str = "poleLightA";
pub const NODE_POLE_LIGHT_B: &str = "poleLightB";
pub const NODE_PORTAL_LIGHT: &str = "portalLight";

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("not a scene file (bad magic)")]
    BadMagic,
    #[error("unsupported scene version {0}")]
    UnsupportedVersion(u32),
    #[error("scene file truncated")]
    Truncated,
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("node {0:?} references data outside the blob")]
    NodeOutOfBounds(String),
}

/// Interleaved vertex layout shared by every mesh pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// One named mesh from the scene file.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshNode {
    pub name: String,
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Decoded scene: a flat list of named mesh nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneData {
    pub nodes: Vec<MeshNode>,
}

#[derive(Serialize, Deserialize)]
struct Manifest {
    nodes: Vec<ManifestNode>,
}

#[derive(Serialize, Deserialize)]
struct ManifestNode {
    name: String,
    // Offsets are element counts into the blob's vertex/index regions
    vertex_offset: u32,
    vertex_count: u32,
    index_offset: u32,
    index_count: u32,
}

const VERTEX_FLOATS: usize = 5; // position xyz + uv

impl SceneData {
    /// Decode a scene container. Never panics on malformed input; every
    /// failure mode is a typed [`SceneError`].
    pub fn decode(bytes: &[u8]) -> Result<Self, SceneError> {
        if bytes.len() < 12 {
            return Err(SceneError::Truncated);
        }
        if bytes[0..4] != SCENE_MAGIC {
            return Err(SceneError::BadMagic);
        }
        let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if version != SCENE_VERSION {
            return Err(SceneError::UnsupportedVersion(version));
        }
        let manifest_len = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize;
        let blob_start = 12usize.checked_add(manifest_len).ok_or(SceneError::Truncated)?;
        if bytes.len() < blob_start {
            return Err(SceneError::Truncated);
        }
        let manifest: Manifest = serde_json::from_slice(&bytes[12..blob_start])?;
        let blob = &bytes[blob_start..];

        // Vertex region first, index region after; sizes derived from the
        // manifest's maxima so the two regions cannot overlap.
        let vertex_floats: usize = manifest
            .nodes
            .iter()
            .map(|n| (n.vertex_offset as usize + n.vertex_count as usize) * VERTEX_FLOATS)
            .max()
            .unwrap_or(0);
        let vertex_bytes = vertex_floats * 4;

        let mut nodes = Vec::with_capacity(manifest.nodes.len());
        for mn in &manifest.nodes {
            let v_start = mn.vertex_offset as usize * VERTEX_FLOATS * 4;
            let v_end = v_start + mn.vertex_count as usize * VERTEX_FLOATS * 4;
            let i_start = vertex_bytes + mn.index_offset as usize * 4;
            let i_end = i_start + mn.index_count as usize * 4;
            if v_end > blob.len() || i_end > blob.len() {
                return Err(SceneError::NodeOutOfBounds(mn.name.clone()));
            }
            let floats: Vec<f32> = blob[v_start..v_end]
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect();
            let vertices = floats
                .chunks_exact(VERTEX_FLOATS)
                .map(|v| MeshVertex {
                    position: [v[0], v[1], v[2]],
                    uv: [v[3], v[4]],
                })
                .collect();
            let indices = blob[i_start..i_end]
                .chunks_exact(4)
                .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect();
            nodes.push(MeshNode {
                name: mn.name.clone(),
                vertices,
                indices,
            });
        }
        Ok(Self { nodes })
    }

    /// Encode into the container layout `decode` reads. Used by the export
    /// tooling and by tests to build fixtures.
    pub fn encode(&self) -> Vec<u8> {
        let mut manifest = Manifest { nodes: Vec::new() };
        let mut vertex_region: Vec<u8> = Vec::new();
        let mut index_region: Vec<u8> = Vec::new();
        let mut vertex_cursor = 0u32;
        let mut index_cursor = 0u32;
        for node in &self.nodes {
            manifest.nodes.push(ManifestNode {
                name: node.name.clone(),
                vertex_offset: vertex_cursor,
                vertex_count: node.vertices.len() as u32,
                index_offset: index_cursor,
                index_count: node.indices.len() as u32,
            });
            for v in &node.vertices {
                for f in [v.position[0], v.position[1], v.position[2], v.uv[0], v.uv[1]] {
                    vertex_region.extend_from_slice(&f.to_le_bytes());
                }
            }
            for i in &node.indices {
                index_region.extend_from_slice(&i.to_le_bytes());
            }
            vertex_cursor += node.vertices.len() as u32;
            index_cursor += node.indices.len() as u32;
        }
        let manifest_json = serde_json::to_vec(&manifest).expect("manifest serialization");
        let mut out = Vec::with_capacity(12 + manifest_json.len() + vertex_region.len() + index_region.len());
        out.extend_from_slice(&SCENE_MAGIC);
        out.extend_from_slice(&SCENE_VERSION.to_le_bytes());
        out.extend_from_slice(&(manifest_json.len() as u32).to_le_bytes());
        out.extend_from_slice(&manifest_json);
        out.extend_from_slice(&vertex_region);
        out.extend_from_slice(&index_region);
        out
    }
}

/// Typed slots for the four meshes the scene is expected to contain.
///
/// A single scan populates the slots; absence is explicit rather than a
/// faulting lookup, so a renamed or missing node degrades to a logged warning
/// instead of taking down the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NamedMeshes {
    pub baked: Option<usize>,
    pub pole_light_a: Option<usize>,
    pub pole_light_b: Option<usize>,
    pub portal_light: Option<usize>,
}

impl NamedMeshes {
    pub fn scan(nodes: &[MeshNode]) -> Self {
        let mut slots = Self::default();
        for (i, node) in nodes.iter().enumerate() {
            match node.name.as_str() {
                NODE_BAKED => slots.baked = Some(i),
                NODE_POLE_LIGHT_A => slots.pole_light_a = Some(i),
                NODE_POLE_LIGHT_B => slots.pole_light_b = Some(i),
                NODE_PORTAL_LIGHT => slots.portal_light = Some(i),
                _ => {}
            }
        }
        slots
    }

    /// Names of expected nodes the scan did not find.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.baked.is_none() {
            out.push(NODE_BAKED);
        }
        if self.pole_light_a.is_none() {
            out.push(NODE_POLE_LIGHT_A);
        }
        if self.pole_light_b.is_none() {
            out.push(NODE_POLE_LIGHT_B);
        }
        if self.portal_light.is_none() {
            out.push(NODE_PORTAL_LIGHT);
        }
        out
    }
}

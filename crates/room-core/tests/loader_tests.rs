// Host-side tests for the room load chain and GLB parsing.
// Futures are driven with pollster against an in-memory asset source.

use glam::Vec3;
use room_core::loader::{load_room, load_room_asset, AssetError, AssetSource};
use room_core::model::{parse_glb, ModelError, RoomOrigin};
use room_core::{fallback_room, PRIMARY_ROOM_PATH, SECONDARY_ROOM_PATH};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
struct MemorySource {
    files: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl MemorySource {
    fn with(mut self, path: &str, bytes: Vec<u8>) -> Self {
        self.files.insert(path.to_string(), bytes);
        self
    }
}

impl AssetSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.requests.borrow_mut().push(path.to_string());
        self.files.get(path).cloned().ok_or(AssetError::Status {
            path: path.to_string(),
            status: 404,
        })
    }
}

fn pad_to_four(mut bytes: Vec<u8>, fill: u8) -> Vec<u8> {
    while bytes.len() % 4 != 0 {
        bytes.push(fill);
    }
    bytes
}

/// A GLB with one translated node holding a single indexed triangle.
fn triangle_glb() -> Vec<u8> {
    build_glb(&[0, 1, 2], None)
}

/// Three-vertex GLB with the given index list and, optionally, an explicit
/// NORMAL accessor (which may be shorter than POSITION).
fn build_glb(indices: &[u16], normals: Option<&[[f32; 3]]>) -> Vec<u8> {
    let mut bin = Vec::new();
    for p in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
        for c in p {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    let normals = normals.unwrap_or(&[]);
    for n in normals {
        for c in n {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    let normals_len = normals.len() * 12;
    let index_offset = 36 + normals_len;
    for i in indices {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    let index_len = indices.len() * 2;
    let bin_len = bin.len();

    let (attributes, normal_view, normal_accessor) = if normals.is_empty() {
        (r#"{"POSITION":0}"#.to_string(), String::new(), String::new())
    } else {
        (
            r#"{"POSITION":0,"NORMAL":2}"#.to_string(),
            format!(r#",{{"buffer":0,"byteOffset":36,"byteLength":{normals_len}}}"#),
            format!(
                r#",{{"bufferView":2,"componentType":5126,"count":{},"type":"VEC3"}}"#,
                normals.len()
            ),
        )
    };
    let json = format!(
        r#"{{"asset":{{"version":"2.0"}},"scene":0,"scenes":[{{"nodes":[0]}}],"nodes":[{{"mesh":0,"translation":[1.0,2.0,3.0]}}],"meshes":[{{"primitives":[{{"attributes":{attributes},"indices":1}}]}}],"buffers":[{{"byteLength":{bin_len}}}],"bufferViews":[{{"buffer":0,"byteOffset":0,"byteLength":36}},{{"buffer":0,"byteOffset":{index_offset},"byteLength":{index_len}}}{normal_view}],"accessors":[{{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0.0,0.0,0.0],"max":[1.0,1.0,0.0]}},{{"bufferView":1,"componentType":5123,"count":{},"type":"SCALAR"}}{normal_accessor}]}}"#,
        indices.len()
    );
    let json = pad_to_four(json.into_bytes(), b' ');
    let bin = pad_to_four(bin, 0);

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(json.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"JSON");
    glb.extend_from_slice(&json);
    glb.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"BIN\0");
    glb.extend_from_slice(&bin);
    glb
}

fn default_paths() -> Vec<String> {
    vec![PRIMARY_ROOM_PATH.to_string(), SECONDARY_ROOM_PATH.to_string()]
}

#[test]
fn parse_glb_applies_node_transform_and_computes_normals() {
    let parts = parse_glb(&triangle_glb()).expect("valid glb");
    assert_eq!(parts.len(), 1);
    let mesh = &parts[0].mesh;
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    let p0 = Vec3::from(mesh.vertices[0].position);
    let p1 = Vec3::from(mesh.vertices[1].position);
    assert!(p0.distance(Vec3::new(1.0, 2.0, 3.0)) < 1e-6);
    assert!(p1.distance(Vec3::new(2.0, 2.0, 3.0)) < 1e-6);
    for v in &mesh.vertices {
        assert!(Vec3::from(v.normal).distance(Vec3::Z) < 1e-6);
    }
    // No material: glTF default base colour.
    assert_eq!(parts[0].color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn parse_glb_drops_whole_triangles_with_out_of_range_indices() {
    let parts = parse_glb(&build_glb(&[0, 1, 5, 0, 1, 2], None)).expect("valid glb");
    let mesh = &parts[0].mesh;
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.vertices.len(), 3);
}

#[test]
fn parse_glb_recomputes_normals_when_counts_disagree() {
    let short = [[1.0f32, 0.0, 0.0], [1.0, 0.0, 0.0]];
    let parts = parse_glb(&build_glb(&[0, 1, 2], Some(&short))).expect("valid glb");
    let mesh = &parts[0].mesh;
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    for v in &mesh.vertices {
        assert!(Vec3::from(v.normal).distance(Vec3::Z) < 1e-6);
    }
}

#[test]
fn parse_glb_keeps_matching_normals() {
    // Opposite to the winding so computed normals would differ.
    let given = [[0.0f32, 0.0, -1.0]; 3];
    let parts = parse_glb(&build_glb(&[0, 1, 2], Some(&given))).expect("valid glb");
    for v in &parts[0].mesh.vertices {
        assert!(Vec3::from(v.normal).distance(Vec3::NEG_Z) < 1e-6);
    }
}

#[test]
fn parse_glb_rejects_garbage() {
    let err = parse_glb(b"definitely not a model").unwrap_err();
    assert!(matches!(err, ModelError::Gltf(_)));
}

#[test]
fn primary_asset_wins_when_available() {
    let source = MemorySource::default().with(PRIMARY_ROOM_PATH, triangle_glb());
    let room = pollster::block_on(load_room(&source, &default_paths()));
    assert_eq!(room.origin, RoomOrigin::Asset(PRIMARY_ROOM_PATH.to_string()));
    assert_eq!(source.requests.borrow().as_slice(), [PRIMARY_ROOM_PATH]);
}

#[test]
fn secondary_asset_used_when_primary_missing() {
    let source = MemorySource::default().with(SECONDARY_ROOM_PATH, triangle_glb());
    let room = pollster::block_on(load_room(&source, &default_paths()));
    assert_eq!(room.origin, RoomOrigin::Asset(SECONDARY_ROOM_PATH.to_string()));
    assert_eq!(
        source.requests.borrow().as_slice(),
        [PRIMARY_ROOM_PATH, SECONDARY_ROOM_PATH]
    );
}

#[test]
fn unparsable_primary_falls_through_to_secondary() {
    let source = MemorySource::default()
        .with(PRIMARY_ROOM_PATH, b"<html>404</html>".to_vec())
        .with(SECONDARY_ROOM_PATH, triangle_glb());
    let err = pollster::block_on(load_room_asset(&source, PRIMARY_ROOM_PATH)).unwrap_err();
    assert!(matches!(err, AssetError::Parse { .. }));
    let room = pollster::block_on(load_room(&source, &default_paths()));
    assert_eq!(room.origin, RoomOrigin::Asset(SECONDARY_ROOM_PATH.to_string()));
}

#[test]
fn fallback_room_when_nothing_loads() {
    let source = MemorySource::default();
    let room = pollster::block_on(load_room(&source, &default_paths()));
    assert_eq!(room.origin, RoomOrigin::Fallback);
    assert_eq!(room.parts.len(), 2);
    assert!(room.vertex_count() > 0);
}

#[test]
fn fallback_shell_faces_inward_and_sits_on_floor() {
    let room = fallback_room();
    let shell = &room.parts[0].mesh;
    let min_y = shell
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::MAX, f32::min);
    assert!(min_y.abs() < 1e-6);
    for v in &shell.vertices {
        let p = Vec3::from(v.position) - Vec3::new(0.0, 2.5, 0.0);
        let n = Vec3::from(v.normal);
        assert!(p.dot(n) < 0.0, "normal {n:?} at {p:?} points outward");
    }
}

#[test]
fn scene_takes_loaded_room_as_root_node() {
    let mut ctx = room_core::SceneContext::new(room_core::SceneConfig {
        seed: Some(5),
        ..Default::default()
    });
    assert!(ctx.room.is_none());
    ctx.set_room(fallback_room());
    assert!(matches!(ctx.room.as_ref().map(|r| &r.origin), Some(RoomOrigin::Fallback)));
}

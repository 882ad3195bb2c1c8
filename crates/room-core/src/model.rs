//! Room geometry: parsed from a binary glTF container or built procedurally.

use crate::constants::*;
use crate::geometry::{self, compute_normals, MeshData, MeshVertex};
use glam::{Mat3, Mat4, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("glTF has no scene")]
    NoScene,
    #[error("primitive {mesh}/{primitive} has no POSITION attribute")]
    MissingPositions { mesh: usize, primitive: usize },
    #[error("buffer {0} is not embedded in the binary chunk")]
    ExternalBuffer(usize),
    #[error("scene contains no triangle geometry")]
    Empty,
}

/// One drawable piece of the room, already in world space.
#[derive(Clone, Debug)]
pub struct RoomPart {
    pub mesh: MeshData,
    pub color: [f32; 4],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomOrigin {
    Asset(String),
    Fallback,
}

/// The single root visual node for the room.
#[derive(Clone, Debug)]
pub struct RoomModel {
    pub parts: Vec<RoomPart>,
    pub origin: RoomOrigin,
}

impl RoomModel {
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.vertices.len()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.triangle_count()).sum()
    }
}

/// Parse a `.glb` container and flatten its default scene into world-space parts.
pub fn parse_glb(bytes: &[u8]) -> Result<Vec<RoomPart>, ModelError> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref();

    for buffer in gltf.buffers() {
        if let gltf::buffer::Source::Uri(_) = buffer.source() {
            return Err(ModelError::ExternalBuffer(buffer.index()));
        }
    }

    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or(ModelError::NoScene)?;

    let mut parts = Vec::new();
    for node in scene.nodes() {
        collect_node(&node, Mat4::IDENTITY, blob, &mut parts)?;
    }
    if parts.is_empty() {
        return Err(ModelError::Empty);
    }
    Ok(parts)
}

fn collect_node(
    node: &gltf::Node<'_>,
    parent: Mat4,
    blob: Option<&[u8]>,
    out: &mut Vec<RoomPart>,
) -> Result<(), ModelError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::debug!(
                    "[loader] skipping non-triangle primitive {}/{}",
                    mesh.index(),
                    primitive.index()
                );
                continue;
            }
            let reader = primitive.reader(|_| blob);
            let positions: Vec<Vec3> = reader
                .read_positions()
                .ok_or(ModelError::MissingPositions {
                    mesh: mesh.index(),
                    primitive: primitive.index(),
                })?
                .map(Vec3::from)
                .collect();
            let indices: Vec<u32> = match reader.read_indices() {
                Some(ix) => ix.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            let vertex_count = positions.len() as u32;
            // Drop whole triangles that reference missing vertices.
            let indices: Vec<u32> = indices
                .chunks_exact(3)
                .filter(|tri| tri.iter().all(|&i| i < vertex_count))
                .flatten()
                .copied()
                .collect();
            let normals: Vec<Vec3> = match reader.read_normals() {
                Some(ns) => {
                    let ns: Vec<Vec3> = ns.map(Vec3::from).collect();
                    if ns.len() == positions.len() {
                        ns
                    } else {
                        log::debug!(
                            "[loader] primitive {}/{} has {} normals for {} positions; recomputing",
                            mesh.index(),
                            primitive.index(),
                            ns.len(),
                            positions.len()
                        );
                        compute_normals(&positions, &indices)
                    }
                }
                None => compute_normals(&positions, &indices),
            };

            let vertices = positions
                .iter()
                .zip(normals.iter())
                .map(|(p, n)| {
                    MeshVertex::new(
                        world.transform_point3(*p),
                        (normal_matrix * *n).normalize_or_zero(),
                    )
                })
                .collect::<Vec<_>>();
            let color = primitive
                .material()
                .pbr_metallic_roughness()
                .base_color_factor();
            out.push(RoomPart {
                mesh: MeshData { vertices, indices },
                color,
            });
        }
    }

    for child in node.children() {
        collect_node(&child, world, blob, out)?;
    }
    Ok(())
}

/// Minimal room so the scene is never empty: an inward-facing box shell
/// standing on y = 0 and a floor plane.
pub fn fallback_room() -> RoomModel {
    let size = Vec3::from(FALLBACK_ROOM_SIZE);
    let mut shell = geometry::cuboid(size).flipped();
    for v in &mut shell.vertices {
        v.position[1] += size.y * 0.5;
    }
    let mut floor = geometry::plane(size.x, size.z);
    // Lift a hair above the shell's bottom face to avoid z-fighting.
    for v in &mut floor.vertices {
        v.position[1] += 0.001;
    }
    let [wr, wg, wb] = FALLBACK_WALL_RGB;
    let [fr, fg, fb] = FALLBACK_FLOOR_RGB;
    RoomModel {
        parts: vec![
            RoomPart {
                mesh: shell,
                color: [wr, wg, wb, 1.0],
            },
            RoomPart {
                mesh: floor,
                color: [fr, fg, fb, 1.0],
            },
        ],
        origin: RoomOrigin::Fallback,
    }
}

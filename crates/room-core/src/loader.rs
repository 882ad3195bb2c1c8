//! Room asset load chain: primary path, secondary path, procedural fallback.

use crate::model::{fallback_room, parse_glb, ModelError, RoomModel, RoomOrigin};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("fetch of `{path}` failed: {reason}")]
    Fetch { path: String, reason: String },
    #[error("`{path}` returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("`{path}` could not be parsed: {source}")]
    Parse {
        path: String,
        #[source]
        source: ModelError,
    },
}

/// Byte source for packaged assets; the web frontend backs this with `fetch`.
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, AssetError>;
}

/// Fetch and parse one room asset.
pub async fn load_room_asset<S: AssetSource>(source: &S, path: &str) -> Result<RoomModel, AssetError> {
    let bytes = source.fetch(path).await?;
    let parts = parse_glb(&bytes).map_err(|source| AssetError::Parse {
        path: path.to_string(),
        source,
    })?;
    Ok(RoomModel {
        parts,
        origin: RoomOrigin::Asset(path.to_string()),
    })
}

/// Try each path in order and fall back to the procedural room. Never fails;
/// every failure is logged.
pub async fn load_room<S: AssetSource>(source: &S, paths: &[String]) -> RoomModel {
    for path in paths {
        match load_room_asset(source, path).await {
            Ok(room) => {
                log::info!(
                    "[loader] room loaded from {} ({} parts, {} vertices, {} triangles)",
                    path,
                    room.parts.len(),
                    room.vertex_count(),
                    room.triangle_count()
                );
                return room;
            }
            Err(e) => log::warn!("[loader] {}", e),
        }
    }
    log::warn!("[loader] no room asset could be loaded; using fallback room");
    fallback_room()
}

pub mod animation;
pub mod camera;
pub mod catalog;
pub mod constants;
pub mod geometry;
pub mod interaction;
pub mod loader;
pub mod model;
pub mod objects;
pub mod panel;
pub mod picking;
pub mod scene;

pub use camera::{Camera, OrbitControls};
pub use catalog::{object_info, visual_spec, ObjectInfo, ObjectKind};
pub use constants::*;
pub use interaction::{ClickOutcome, Cursor, FlashTicket, HoverOutcome, PointerState};
pub use loader::{load_room, AssetError, AssetSource};
pub use model::{fallback_room, RoomModel, RoomOrigin, RoomPart};
pub use objects::{InteractiveObject, ObjectRegistry, ObjectState};
pub use panel::{DisplaySink, InfoPanelState, PanelPolicy};
pub use scene::{SceneConfig, SceneContext};

//! Scene context: the one owner of camera, controls, objects, panel and room.

use crate::animation::{apply_float, apply_hover_spin};
use crate::camera::{Camera, OrbitControls};
use crate::catalog::ObjectKind;
use crate::constants::*;
use crate::model::RoomModel;
use crate::objects::ObjectRegistry;
use crate::panel::{InfoPanelState, PanelPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Values a page may vary at startup.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub room_paths: Vec<String>,
    pub panel_policy: PanelPolicy,
    pub auto_rotate: bool,
    /// Seed for per-object float speeds; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            room_paths: vec![
                PRIMARY_ROOM_PATH.to_string(),
                SECONDARY_ROOM_PATH.to_string(),
            ],
            panel_policy: PanelPolicy::default(),
            auto_rotate: false,
            seed: None,
        }
    }
}

pub struct SceneContext {
    pub config: SceneConfig,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub objects: ObjectRegistry,
    pub panel: InfoPanelState,
    pub room: Option<RoomModel>,
    pub(crate) last_hovered: Option<ObjectKind>,
}

impl SceneContext {
    /// Compose the scene once: camera, controls and the interactive objects.
    /// The room arrives later through [`SceneContext::set_room`].
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let camera = Camera::default();
        let mut controls = OrbitControls::new(camera.eye, camera.target);
        controls.auto_rotate = config.auto_rotate;
        Self {
            objects: ObjectRegistry::compose(&mut rng),
            panel: InfoPanelState::default(),
            room: None,
            last_hovered: None,
            camera,
            controls,
            config,
        }
    }

    /// Attach the room as the scene's root visual node.
    pub fn set_room(&mut self, room: RoomModel) {
        if self.room.is_some() {
            log::warn!("[scene] replacing existing room node");
        }
        self.room = Some(room);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    pub fn reset_view(&mut self) {
        self.controls.reset(&mut self.camera);
        log::info!("[controls] view reset (distance {:.2})", self.controls.distance());
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        let on = self.controls.toggle_auto_rotate();
        log::info!("[controls] auto-rotate {}", if on { "on" } else { "off" });
        on
    }

    /// Per-frame CPU update: camera controls, floating motion, hover spin.
    /// `t_sec` is wall-clock time since start, `dt_sec` the time since the
    /// previous tick.
    pub fn tick(&mut self, t_sec: f32, dt_sec: f32) {
        self.controls.update(&mut self.camera, dt_sec);
        apply_float(&mut self.objects, t_sec);
        apply_hover_spin(&mut self.objects, dt_sec);
    }
}

//! Interactive object records and the registry the composer fills.

use crate::catalog::{visual_spec, Material, ObjectKind};
use crate::constants::*;
use crate::geometry::{Bounds, MeshData};
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

/// Per-object float animation: `amplitude * sin(t * speed)` above the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatPhase {
    pub speed: f32,
    pub amplitude: f32,
}

impl FloatPhase {
    #[inline]
    pub fn offset_at(&self, t_sec: f32) -> f32 {
        self.amplitude * (t_sec * self.speed).sin()
    }
}

/// Visual values captured when a click flash starts; restored when it ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlashBaseline {
    pub scale: f32,
    pub glow_opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectState {
    Idle,
    Hovering,
    ClickedFlash,
}

#[derive(Clone, Debug)]
pub struct InteractiveObject {
    pub kind: ObjectKind,
    pub base_position: Vec3,
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: f32,
    pub float_phase: FloatPhase,
    pub hovered: bool,
    pub glow_opacity: f32,
    pub flash: Option<FlashBaseline>,
    pub material: Material,
    pub glow_rgb: [f32; 3],
    pub mesh: MeshData,
    pub bounds: Bounds,
}

impl InteractiveObject {
    pub fn new(kind: ObjectKind, float_speed: f32) -> Self {
        let spec = visual_spec(kind);
        let mesh = spec.shape.build();
        let bounds = mesh.bounds();
        let base_position = Vec3::from(spec.position);
        Self {
            kind,
            base_position,
            position: base_position,
            rotation_y: 0.0,
            scale: BASE_SCALE,
            float_phase: FloatPhase {
                speed: float_speed,
                amplitude: FLOAT_AMPLITUDE,
            },
            hovered: false,
            glow_opacity: GLOW_IDLE_OPACITY,
            flash: None,
            material: spec.material,
            glow_rgb: spec.glow_rgb,
            mesh,
            bounds,
        }
    }

    pub fn state(&self) -> ObjectState {
        if self.flash.is_some() {
            ObjectState::ClickedFlash
        } else if self.hovered {
            ObjectState::Hovering
        } else {
            ObjectState::Idle
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y),
            self.position,
        )
    }

    /// Transform of the unit glow sphere enclosing the body.
    pub fn glow_matrix(&self) -> Mat4 {
        let r = self.bounds.radius * GLOW_RADIUS_FACTOR * self.scale;
        Mat4::from_scale_rotation_translation(
            Vec3::splat(r),
            Quat::IDENTITY,
            self.model_matrix().transform_point3(self.bounds.center),
        )
    }

    /// World-space centre and size of the label sprite.
    pub fn label_placement(&self) -> (Vec3, [f32; 2]) {
        let center = self.position + Vec3::Y * (LABEL_OFFSET_Y * self.scale);
        let size = [
            LABEL_WORLD_SIZE[0] * self.scale,
            LABEL_WORLD_SIZE[1] * self.scale,
        ];
        (center, size)
    }
}

/// Flat, fixed-after-startup list of interactive objects, addressable by kind.
#[derive(Clone, Debug, Default)]
pub struct ObjectRegistry {
    objects: Vec<InteractiveObject>,
    by_kind: FnvHashMap<ObjectKind, usize>,
}

impl ObjectRegistry {
    /// Build one object per catalog entry, in registration order, each with a
    /// float speed drawn from `rng`.
    pub fn compose<R: Rng>(rng: &mut R) -> Self {
        let mut registry = Self::default();
        for kind in ObjectKind::ALL {
            let speed = rng.gen_range(FLOAT_SPEED_MIN..FLOAT_SPEED_MAX);
            registry.register(InteractiveObject::new(kind, speed));
        }
        log::info!("[scene] registered {} interactive objects", registry.len());
        registry
    }

    fn register(&mut self, object: InteractiveObject) {
        self.by_kind.insert(object.kind, self.objects.len());
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, kind: ObjectKind) -> Option<&InteractiveObject> {
        self.by_kind.get(&kind).map(|&i| &self.objects[i])
    }

    pub fn get_mut(&mut self, kind: ObjectKind) -> Option<&mut InteractiveObject> {
        self.by_kind.get(&kind).map(|&i| &mut self.objects[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractiveObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut InteractiveObject> {
        self.objects.iter_mut()
    }

    pub fn as_slice(&self) -> &[InteractiveObject] {
        &self.objects
    }
}

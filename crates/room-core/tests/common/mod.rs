// Shared test helpers: a display sink that records calls and a ray aimer.
#![allow(dead_code)]

use glam::{Vec2, Vec3, Vec4};
use room_core::picking::Ray;
use room_core::{DisplaySink, SceneConfig, SceneContext};

#[derive(Default, Debug)]
pub struct RecordingSink {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub visible: bool,
    pub content_updates: usize,
}

impl DisplaySink for RecordingSink {
    fn set_content(&mut self, title: &str, description: &str, image: Option<&str>) {
        self.title = Some(title.to_string());
        self.description = Some(description.to_string());
        self.image = image.map(str::to_string);
        self.content_updates += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

pub fn seeded_scene() -> SceneContext {
    SceneContext::new(SceneConfig {
        seed: Some(42),
        ..SceneConfig::default()
    })
}

/// Ray from the camera eye through a world point.
pub fn ray_through(ctx: &SceneContext, point: Vec3) -> Ray {
    Ray::new(ctx.camera.eye, (point - ctx.camera.eye).normalize())
}

/// Ray from the camera eye towards the sky, hitting nothing.
pub fn empty_ray(ctx: &SceneContext) -> Ray {
    Ray::new(ctx.camera.eye, Vec3::Y)
}

/// NDC of a world point as seen by the scene camera.
pub fn ndc_of(ctx: &SceneContext, point: Vec3) -> Vec2 {
    let clip = ctx.camera.view_projection() * Vec4::new(point.x, point.y, point.z, 1.0);
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

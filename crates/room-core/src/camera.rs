//! Perspective camera and damped orbit controls.
//!
//! These types intentionally avoid referencing platform-specific APIs. The web
//! frontend feeds them pointer deltas and wheel notches and reads back the
//! view/projection matrices each frame.

use crate::constants::*;
use crate::picking::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: camera_target_vec3(),
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Track a new viewport size. Degenerate sizes are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// World-space picking ray through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let p0: Vec3 = p_near.truncate() / p_near.w;
        Ray::new(self.eye, (p1 - p0).normalize_or_zero())
    }
}

/// Orbit around a target with inertia, dolly and optional auto-rotation.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub auto_rotate: bool,
    target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    home_eye: Vec3,
    home_target: Vec3,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let mut controls = Self {
            auto_rotate: false,
            target,
            radius: 1.0,
            theta: 0.0,
            phi: PI / 2.0,
            pending_theta: 0.0,
            pending_phi: 0.0,
            home_eye: eye,
            home_target: target,
        };
        controls.set_pose(eye, target);
        controls
    }

    fn set_pose(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        self.target = target;
        self.radius = offset.length().max(f32::EPSILON);
        self.theta = offset.x.atan2(offset.z);
        self.phi = (offset.y / self.radius).clamp(-1.0, 1.0).acos();
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    /// Queue a rotation from a pointer drag of `delta` pixels; a drag across
    /// the full viewport height is one full turn.
    pub fn rotate_by_pixels(&mut self, delta: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_theta -= TAU * delta.x / h * ORBIT_ROTATE_SPEED;
        self.pending_phi -= TAU * delta.y / h * ORBIT_ROTATE_SPEED;
    }

    /// Dolly towards (negative) or away from (positive) the target.
    pub fn dolly(&mut self, wheel_delta_y: f32) {
        if wheel_delta_y > 0.0 {
            self.radius /= ORBIT_ZOOM_STEP;
        } else if wheel_delta_y < 0.0 {
            self.radius *= ORBIT_ZOOM_STEP;
        }
        self.radius = self.radius.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Restore the initial pose and drop any pending inertia.
    pub fn reset(&mut self, camera: &mut Camera) {
        self.set_pose(self.home_eye, self.home_target);
        camera.eye = self.eye();
        camera.target = self.target;
    }

    /// Advance damping and auto-rotation by `dt_sec` and write the pose into `camera`.
    pub fn update(&mut self, camera: &mut Camera, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        if self.auto_rotate {
            self.pending_theta -= auto_rotate_angle(dt);
        }
        let applied = damping_fraction(dt);
        self.theta += self.pending_theta * applied;
        self.phi += self.pending_phi * applied;
        self.pending_theta *= 1.0 - applied;
        self.pending_phi *= 1.0 - applied;
        self.phi = self
            .phi
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        camera.eye = self.eye();
        camera.target = self.target;
    }
}

/// Azimuth change contributed by auto-rotation over `dt_sec`.
#[inline]
pub fn auto_rotate_angle(dt_sec: f32) -> f32 {
    TAU / 60.0 * AUTO_ROTATE_SPEED * dt_sec
}

/// Share of pending motion consumed over `dt_sec`; equals `ORBIT_DAMPING`
/// for one 60 Hz frame regardless of the actual refresh rate.
#[inline]
pub fn damping_fraction(dt_sec: f32) -> f32 {
    1.0 - (1.0 - ORBIT_DAMPING).powf(dt_sec * 60.0)
}

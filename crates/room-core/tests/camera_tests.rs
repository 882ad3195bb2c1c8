// Host-side tests for camera projection and orbit controls.

use glam::{Vec2, Vec3};
use room_core::camera::{auto_rotate_angle, damping_fraction, Camera, OrbitControls};
use room_core::constants::*;
use room_core::{SceneConfig, SceneContext};

#[test]
fn resize_sets_aspect_to_width_over_height() {
    let mut ctx = SceneContext::new(SceneConfig {
        seed: Some(3),
        ..Default::default()
    });
    for (w, h) in [(1920.0_f32, 1080.0_f32), (375.0, 812.0), (1.0, 1.0), (1001.0, 37.0)] {
        ctx.resize(w, h);
        assert_eq!(ctx.camera.aspect, w / h);
    }
}

#[test]
fn degenerate_viewport_is_ignored() {
    let mut cam = Camera::default();
    cam.set_viewport(800.0, 600.0);
    cam.set_viewport(800.0, 0.0);
    assert_eq!(cam.aspect, 800.0 / 600.0);
}

#[test]
fn default_camera_matches_room_view() {
    let cam = Camera::default();
    assert_eq!(cam.eye, Vec3::new(5.0, 5.0, 5.0));
    assert_eq!(cam.target, Vec3::ZERO);
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    assert_eq!(cam.znear, 0.1);
    assert_eq!(cam.zfar, 1000.0);
}

#[test]
fn centre_ray_points_at_target() {
    let cam = Camera::default();
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    let expected = (cam.target - cam.eye).normalize();
    assert_eq!(ray.origin, cam.eye);
    assert!(ray.dir.distance(expected) < 1e-4);
}

#[test]
fn damping_fraction_is_frame_rate_normalised() {
    assert!((damping_fraction(1.0 / 60.0) - ORBIT_DAMPING).abs() < 1e-6);
    // Two 120 Hz steps consume the same share as one 60 Hz step.
    let half = damping_fraction(1.0 / 120.0);
    let remaining = (1.0 - half) * (1.0 - half);
    assert!((1.0 - remaining - ORBIT_DAMPING).abs() < 1e-6);
    assert_eq!(damping_fraction(0.0), 0.0);
}

#[test]
fn auto_rotate_orbits_at_constant_distance() {
    let mut cam = Camera::default();
    let mut controls = OrbitControls::new(cam.eye, cam.target);
    let start = cam.eye;
    let distance = controls.distance();
    controls.auto_rotate = true;
    for _ in 0..120 {
        controls.update(&mut cam, 1.0 / 60.0);
    }
    assert!(cam.eye.distance(start) > 0.01);
    assert!((cam.eye.distance(cam.target) - distance).abs() < 1e-3);
    assert!((cam.eye.y - start.y).abs() < 1e-3);
    assert!(auto_rotate_angle(30.0) > 0.0);
}

#[test]
fn drag_rotation_eases_in_over_several_frames() {
    let mut cam = Camera::default();
    let mut controls = OrbitControls::new(cam.eye, cam.target);
    controls.rotate_by_pixels(Vec2::new(100.0, 0.0), 600.0);
    controls.update(&mut cam, 1.0 / 60.0);
    let after_one = cam.eye;
    for _ in 0..600 {
        controls.update(&mut cam, 1.0 / 60.0);
    }
    let settled = cam.eye;
    assert!(after_one.distance(Vec3::new(5.0, 5.0, 5.0)) > 0.0);
    assert!(settled.distance(after_one) > after_one.distance(Vec3::new(5.0, 5.0, 5.0)));
}

#[test]
fn dolly_is_clamped() {
    let mut controls = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    for _ in 0..500 {
        controls.dolly(-1.0);
    }
    assert_eq!(controls.distance(), ORBIT_MIN_DISTANCE);
    for _ in 0..500 {
        controls.dolly(1.0);
    }
    assert_eq!(controls.distance(), ORBIT_MAX_DISTANCE);
}

#[test]
fn reset_view_restores_initial_pose_and_toggle_flips() {
    let mut ctx = SceneContext::new(SceneConfig {
        seed: Some(9),
        ..Default::default()
    });
    assert!(ctx.toggle_auto_rotate());
    ctx.controls.dolly(1.0);
    for i in 1..=90 {
        ctx.tick(i as f32 / 60.0, 1.0 / 60.0);
    }
    assert!(ctx.camera.eye.distance(Vec3::new(5.0, 5.0, 5.0)) > 0.01);

    ctx.reset_view();
    assert!(ctx.camera.eye.distance(Vec3::new(5.0, 5.0, 5.0)) < 1e-4);
    assert_eq!(ctx.camera.target, Vec3::ZERO);
    assert!(!ctx.toggle_auto_rotate());
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut cam = Camera::default();
    let mut controls = OrbitControls::new(cam.eye, cam.target);
    controls.rotate_by_pixels(Vec2::new(0.0, 5000.0), 600.0);
    for _ in 0..600 {
        controls.update(&mut cam, 1.0 / 60.0);
    }
    let dir = (cam.eye - cam.target).normalize();
    assert!(dir.y > 0.0);
    assert!(Vec2::new(dir.x, dir.z).length() > 1e-4);
}

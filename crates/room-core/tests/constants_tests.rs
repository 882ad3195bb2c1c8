// Host-side tests for tuning constants and their relationships.

use room_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(CAMERA_FOV_Y_DEG > 0.0 && CAMERA_FOV_Y_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    let d = camera_eye_vec3().distance(camera_target_vec3());
    assert!(d >= ORBIT_MIN_DISTANCE && d <= ORBIT_MAX_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_factors_are_fractions() {
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING <= 1.0);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
    assert!(ORBIT_POLAR_EPSILON > 0.0);
    assert!(DRAG_CLICK_THRESHOLD_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn feedback_levels_are_ordered() {
    assert!(GLOW_IDLE_OPACITY < GLOW_HOVER_OPACITY);
    assert!(GLOW_HOVER_OPACITY < GLOW_CLICK_OPACITY);
    assert!(GLOW_CLICK_OPACITY <= 1.0);
    assert!(CLICK_SCALE > BASE_SCALE);
    assert!(GLOW_RADIUS_FACTOR > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn float_speed_range_is_valid() {
    assert!(FLOAT_SPEED_MIN > 0.0);
    assert!(FLOAT_SPEED_MIN < FLOAT_SPEED_MAX);
    assert!(FLOAT_AMPLITUDE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flash_ends_before_panel_hides() {
    assert!(FLASH_REVERT_MS > 0);
    assert!(FLASH_REVERT_MS < PANEL_AUTO_HIDE_MS);
}

#[test]
fn label_canvas_matches_world_aspect() {
    let canvas = LABEL_CANVAS_WIDTH as f32 / LABEL_CANVAS_HEIGHT as f32;
    let world = LABEL_WORLD_SIZE[0] / LABEL_WORLD_SIZE[1];
    assert!((canvas - world).abs() < 1e-6);
}

#[test]
fn fallback_room_contains_every_object() {
    let half = glam::Vec3::from(FALLBACK_ROOM_SIZE) * 0.5;
    for kind in ObjectKind::ALL {
        let p = glam::Vec3::from(visual_spec(kind).position);
        assert!(p.x.abs() < half.x && p.z.abs() < half.z);
        assert!(p.y > 0.0 && p.y < FALLBACK_ROOM_SIZE[1]);
    }
}

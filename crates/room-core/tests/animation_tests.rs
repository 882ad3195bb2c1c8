// Host-side tests for floating motion and hover spin.

mod common;

use common::{ray_through, seeded_scene, RecordingSink};
use glam::Vec3;
use room_core::animation::{apply_float, apply_hover_spin};
use room_core::catalog::ObjectKind;
use room_core::constants::*;
use room_core::objects::FloatPhase;

#[test]
fn float_offset_is_amplitude_times_sine() {
    let phase = FloatPhase {
        speed: 1.3,
        amplitude: FLOAT_AMPLITUDE,
    };
    for i in 0..500 {
        let t = i as f32 * 0.037;
        let expected = FLOAT_AMPLITUDE * (t * 1.3).sin();
        assert!((phase.offset_at(t) - expected).abs() < 1e-6, "t={t}");
        assert!(phase.offset_at(t).abs() <= FLOAT_AMPLITUDE + 1e-6);
    }
}

#[test]
fn float_speeds_come_from_configured_range() {
    let ctx = seeded_scene();
    for obj in ctx.objects.iter() {
        assert!(obj.float_phase.speed >= FLOAT_SPEED_MIN);
        assert!(obj.float_phase.speed < FLOAT_SPEED_MAX);
        assert_eq!(obj.float_phase.amplitude, FLOAT_AMPLITUDE);
    }
}

#[test]
fn apply_float_moves_only_vertically_around_baseline() {
    let mut ctx = seeded_scene();
    for t in [0.0_f32, 0.5, 1.0, 7.25, 120.0] {
        apply_float(&mut ctx.objects, t);
        for obj in ctx.objects.iter() {
            let d = obj.position - obj.base_position;
            assert_eq!(d.x, 0.0);
            assert_eq!(d.z, 0.0);
            let expected = obj.float_phase.amplitude * (t * obj.float_phase.speed).sin();
            assert!((d.y - expected).abs() < 1e-5);
        }
    }
}

#[test]
fn float_position_does_not_depend_on_frame_rate() {
    let mut fast = seeded_scene();
    let mut slow = seeded_scene();
    let mut t = 0.0_f32;
    while t < 2.0 {
        t += 1.0 / 144.0;
        fast.tick(t, 1.0 / 144.0);
    }
    slow.tick(0.9, 0.9);
    slow.tick(t, t - 0.9);
    for (a, b) in fast.objects.iter().zip(slow.objects.iter()) {
        assert!((a.position.y - b.position.y).abs() < 1e-5);
    }
}

#[test]
fn hovered_object_spins_and_others_do_not() {
    let mut ctx = seeded_scene();
    let mut sink = RecordingSink::default();
    let ray = ray_through(&ctx, Vec3::new(-1.0, 0.8, 2.0));
    ctx.hover_ray(&ray, &mut sink);

    apply_hover_spin(&mut ctx.objects, 0.5);
    let book = ctx.objects.get(ObjectKind::Book).unwrap();
    assert!((book.rotation_y - HOVER_SPIN_RAD_PER_SEC * 0.5).abs() < 1e-6);
    for obj in ctx.objects.iter().filter(|o| o.kind != ObjectKind::Book) {
        assert_eq!(obj.rotation_y, 0.0);
    }
}

use crate::constants::HOVER_SPIN_RAD_PER_SEC;
use crate::objects::ObjectRegistry;

/// Place every object at `baseline + amplitude * sin(t * speed)` vertically.
///
/// Pure function of wall-clock time, so motion speed does not depend on the
/// frame rate and dropped frames are never replayed.
pub fn apply_float(objects: &mut ObjectRegistry, t_sec: f32) {
    for obj in objects.iter_mut() {
        obj.position = obj.base_position;
        obj.position.y += obj.float_phase.offset_at(t_sec);
    }
}

/// Spin hovered objects about Y.
pub fn apply_hover_spin(objects: &mut ObjectRegistry, dt_sec: f32) {
    let step = HOVER_SPIN_RAD_PER_SEC * dt_sec.max(0.0);
    for obj in objects.iter_mut().filter(|o| o.hovered) {
        obj.rotation_y = (obj.rotation_y + step) % std::f32::consts::TAU;
    }
}

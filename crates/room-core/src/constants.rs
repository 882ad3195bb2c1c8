use glam::Vec3;

// Shared visual/interaction tuning constants used by the web frontend.

// Scene
pub const BACKGROUND_RGB: [f32; 3] = [0.941, 0.941, 0.941]; // #f0f0f0

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [5.0, 5.0, 5.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending motion applied per 60 Hz tick
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly scale per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 40.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3;
pub const AUTO_ROTATE_SPEED: f32 = 2.0; // one revolution per 30 s
pub const DRAG_CLICK_THRESHOLD_PX: f32 = 4.0;

// Lighting
pub const AMBIENT_RGB: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const SUN_RGB: [f32; 3] = [1.0, 1.0, 1.0];
pub const SUN_INTENSITY: f32 = 0.8;
pub const SUN_POSITION: [f32; 3] = [10.0, 20.0, 15.0];

// Floating animation
pub const FLOAT_AMPLITUDE: f32 = 0.1;
pub const FLOAT_SPEED_MIN: f32 = 0.8;
pub const FLOAT_SPEED_MAX: f32 = 1.6;

// Hover / click feedback
pub const GLOW_IDLE_OPACITY: f32 = 0.0;
pub const GLOW_HOVER_OPACITY: f32 = 0.3;
pub const GLOW_CLICK_OPACITY: f32 = 0.6;
pub const GLOW_RADIUS_FACTOR: f32 = 1.25; // glow sphere radius relative to body bounds
pub const BASE_SCALE: f32 = 1.0;
pub const CLICK_SCALE: f32 = 1.2;
pub const HOVER_SPIN_RAD_PER_SEC: f32 = 1.2;

// Timers (milliseconds)
pub const FLASH_REVERT_MS: u32 = 300;
pub const PANEL_AUTO_HIDE_MS: u32 = 3000;

// Labels
pub const LABEL_CANVAS_WIDTH: u32 = 256;
pub const LABEL_CANVAS_HEIGHT: u32 = 128;
pub const LABEL_FONT: &str = "bold 40px Arial";
pub const LABEL_BACKGROUND: &str = "rgba(0, 0, 0, 0.8)";
pub const LABEL_TEXT_COLOR: &str = "white";
pub const LABEL_BASELINE_OFFSET_PX: f64 = 15.0;
pub const LABEL_WORLD_SIZE: [f32; 2] = [1.0, 0.5];
pub const LABEL_OFFSET_Y: f32 = 0.5;

// Assets
pub const PRIMARY_ROOM_PATH: &str = "models/your-room.glb";
pub const SECONDARY_ROOM_PATH: &str = "models/room.glb";

// Fallback room
pub const FALLBACK_ROOM_SIZE: [f32; 3] = [10.0, 5.0, 10.0];
pub const FALLBACK_WALL_RGB: [f32; 3] = [0.85, 0.82, 0.78];
pub const FALLBACK_FLOOR_RGB: [f32; 3] = [0.55, 0.45, 0.36];

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}

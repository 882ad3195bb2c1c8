use glam::Vec2;
use room_core::{PointerState, DRAG_CLICK_THRESHOLD_PX};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
}

/// Left-button drag in progress on the canvas.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
    pub travelled: f32,
    /// Set once the drag exceeds the click threshold; the next click is eaten.
    pub suppress_click: bool,
}

impl DragState {
    pub fn begin(&mut self, at: Vec2) {
        self.active = true;
        self.last = at;
        self.travelled = 0.0;
        self.suppress_click = false;
    }

    /// Record movement to `at` and return the delta since the last sample.
    pub fn advance(&mut self, at: Vec2) -> Vec2 {
        let delta = at - self.last;
        self.last = at;
        self.travelled += delta.length();
        if self.travelled > DRAG_CLICK_THRESHOLD_PX {
            self.suppress_click = true;
        }
        delta
    }
}

/// Pointer position in the canvas backing store's pixel space.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
pub fn pointer_state(canvas: &web::HtmlCanvasElement, mouse: &MouseState) -> PointerState {
    PointerState::from_viewport(
        mouse.x,
        mouse.y,
        canvas.width() as f32,
        canvas.height() as f32,
    )
}

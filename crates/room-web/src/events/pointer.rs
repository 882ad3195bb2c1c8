use crate::dom;
use crate::input::{self, DragState, MouseState};
use crate::overlay::InfoOverlay;
use room_core::{ClickOutcome, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneContext>>,
    pub panel: Rc<RefCell<InfoOverlay>>,
    pub mouse_state: Rc<RefCell<MouseState>>,
    pub drag_state: Rc<RefCell<DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_click(&w);
    wire_wheel(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
        }

        let drag_delta = {
            let mut ds = w.drag_state.borrow_mut();
            if ds.active {
                Some(ds.advance(pos))
            } else {
                None
            }
        };
        let pointer = input::pointer_state(&w.canvas, &w.mouse_state.borrow());
        let mut scene = w.scene.borrow_mut();
        if let Some(delta) = drag_delta {
            scene
                .controls
                .rotate_by_pixels(delta, w.canvas.height() as f32);
        }
        let outcome = scene.pointer_move(pointer, &mut *w.panel.borrow_mut());
        dom::set_cursor(&w.canvas, outcome.cursor.as_css());
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.drag_state.borrow_mut().begin(pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut ds = w.drag_state.borrow_mut();
        if ds.active && ds.suppress_click {
            log::debug!("[controls] orbit drag ended ({:.0}px)", ds.travelled);
        }
        ds.active = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // A click that ends an orbit drag is not an object click.
        {
            let mut ds = w.drag_state.borrow_mut();
            if ds.suppress_click {
                ds.suppress_click = false;
                return;
            }
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let pointer = room_core::PointerState::from_viewport(
            pos.x,
            pos.y,
            w.canvas.width() as f32,
            w.canvas.height() as f32,
        );
        let outcome = w
            .scene
            .borrow_mut()
            .click(pointer, &mut *w.panel.borrow_mut());
        schedule_click_timers(&w, outcome);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Flash revert and panel auto-hide. Timers from earlier clicks keep running.
fn schedule_click_timers(w: &InputWiring, outcome: ClickOutcome) {
    if let Some(ticket) = outcome.flash {
        let scene = w.scene.clone();
        dom::set_timeout(ticket.revert_after_ms, move || {
            scene.borrow_mut().end_flash(ticket.kind);
        });
    }
    if let Some(ms) = outcome.auto_hide_after_ms {
        let scene = w.scene.clone();
        let panel = w.panel.clone();
        dom::set_timeout(ms, move || {
            scene
                .borrow_mut()
                .auto_hide_panel(&mut *panel.borrow_mut());
        });
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        w.scene.borrow_mut().controls.dolly(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

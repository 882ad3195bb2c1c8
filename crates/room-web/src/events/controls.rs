use crate::dom;
use room_core::SceneContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `#reset-view` and `#toggle-rotate` page buttons.
pub fn wire_view_buttons(document: &web::Document, scene: Rc<RefCell<SceneContext>>) {
    let scene_reset = scene.clone();
    dom::add_click_listener(document, "reset-view", move || {
        scene_reset.borrow_mut().reset_view();
    });

    let doc = document.clone();
    dom::add_click_listener(document, "toggle-rotate", move || {
        let on = scene.borrow_mut().toggle_auto_rotate();
        sync_rotate_button(&doc, on);
    });
}

/// Mirror the auto-rotate state on the `#toggle-rotate` button.
pub fn sync_rotate_button(document: &web::Document, on: bool) {
    if let Some(btn) = document.get_element_by_id("toggle-rotate") {
        _ = btn.class_list().toggle_with_force("active", on);
    }
}

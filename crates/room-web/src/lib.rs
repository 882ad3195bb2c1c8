#![cfg(target_arch = "wasm32")]
use room_core::{load_room, ObjectKind, SceneConfig, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod fetch;
mod frame;
mod input;
mod label;
mod overlay;
mod render;

thread_local! {
    static SCENE: RefCell<Option<Rc<RefCell<SceneContext>>>> = const { RefCell::new(None) };
}

fn with_scene<R>(f: impl FnOnce(&mut SceneContext) -> R) -> Option<R> {
    SCENE.with(|slot| slot.borrow().as_ref().map(|s| f(&mut s.borrow_mut())))
}

/// Restore the initial camera pose. Callable from page scripts.
#[wasm_bindgen(js_name = resetView)]
pub fn reset_view() {
    if with_scene(|s| s.reset_view()).is_none() {
        log::warn!("[controls] resetView called before the scene exists");
    }
}

/// Flip auto-rotation and return the new state.
#[wasm_bindgen(js_name = toggleAutoRotate)]
pub fn toggle_auto_rotate() -> bool {
    let Some(on) = with_scene(|s| s.toggle_auto_rotate()) else {
        log::warn!("[controls] toggleAutoRotate called before the scene exists");
        return false;
    };
    if let Some(document) = web::window().and_then(|w| w.document()) {
        events::sync_rotate_button(&document, on);
    }
    on
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// `#app-canvas` if the page has one, otherwise a full-size canvas appended
/// to `#container` (or the body).
fn find_or_create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id("app-canvas") {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)));
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id("app-canvas");
    let style = canvas.style();
    _ = style.set_property("width", "100vw");
    _ = style.set_property("height", "100vh");
    _ = style.set_property("display", "block");
    let parent: web::Element = match document.get_element_by_id("container") {
        Some(el) => el,
        None => document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?
            .into(),
    };
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

fn rasterize_labels(document: &web::Document) -> Vec<(ObjectKind, label::LabelImage)> {
    ObjectKind::ALL
        .into_iter()
        .filter_map(|kind| match label::rasterize(document, &kind.label_text()) {
            Ok(img) => Some((kind, img)),
            Err(e) => {
                log::warn!("[scene] label for {} not drawn: {:?}", kind, e);
                None
            }
        })
        .collect()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = find_or_create_canvas(&document)?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let panel = overlay::InfoOverlay::from_document(&document);
    let config = SceneConfig {
        panel_policy: panel.policy(),
        ..SceneConfig::default()
    };
    log::info!("[panel] policy {:?}", config.panel_policy);
    let room_paths = config.room_paths.clone();
    let scene = Rc::new(RefCell::new(SceneContext::new(config)));
    scene
        .borrow_mut()
        .resize(canvas.width() as f32, canvas.height() as f32);
    SCENE.with(|slot| *slot.borrow_mut() = Some(scene.clone()));

    // Room arrives asynchronously; render and input run meanwhile.
    {
        let scene = scene.clone();
        spawn_local(async move {
            let room = load_room(&fetch::FetchSource, &room_paths).await;
            scene.borrow_mut().set_room(room);
        });
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        panel: Rc::new(RefCell::new(panel)),
        mouse_state: Rc::new(RefCell::new(input::MouseState::default())),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });
    events::wire_view_buttons(&document, scene.clone());

    // Without a GPU the scene still animates and answers input.
    let mut gpu = frame::init_gpu(&canvas).await;
    if let Some(g) = &mut gpu {
        g.set_objects(&scene.borrow().objects, &rasterize_labels(&document));
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(scene, canvas, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}

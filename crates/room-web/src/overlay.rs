use room_core::{DisplaySink, PanelPolicy, PANEL_AUTO_HIDE_MS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The `#info` panel: title, description and an optional image.
pub struct InfoOverlay {
    root: Option<web::HtmlElement>,
    title: Option<web::Element>,
    description: Option<web::Element>,
    image: Option<web::HtmlImageElement>,
}

impl InfoOverlay {
    pub fn from_document(document: &web::Document) -> Self {
        let root = document
            .get_element_by_id("info")
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if root.is_none() {
            log::warn!("[panel] no #info element; panel updates are dropped");
        }
        Self {
            root,
            title: document.get_element_by_id("info-title"),
            description: document.get_element_by_id("info-description"),
            image: document
                .get_element_by_id("info-image")
                .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok()),
        }
    }

    /// Pages with an image slot keep the panel up until the next click.
    pub fn policy(&self) -> PanelPolicy {
        if self.image.is_some() {
            PanelPolicy::Sticky
        } else {
            PanelPolicy::Transient {
                auto_hide_ms: PANEL_AUTO_HIDE_MS,
            }
        }
    }
}

impl DisplaySink for InfoOverlay {
    fn set_content(&mut self, title: &str, description: &str, image: Option<&str>) {
        // Bare `#info` container: write the heading and paragraph directly.
        if self.title.is_none() && self.description.is_none() {
            if let Some(root) = &self.root {
                root.set_inner_html(&format!("<h3>{}</h3><p>{}</p>", title, description));
            }
            return;
        }
        if let Some(el) = &self.title {
            el.set_text_content(Some(title));
        }
        if let Some(el) = &self.description {
            el.set_text_content(Some(description));
        }
        if let Some(img) = &self.image {
            match image {
                Some(src) => {
                    img.set_src(src);
                    img.set_alt(title);
                    _ = img.style().set_property("display", "");
                }
                None => {
                    _ = img.style().set_property("display", "none");
                }
            }
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if let Some(el) = &self.root {
            let cl = el.class_list();
            if visible {
                _ = cl.remove_1("hidden");
                _ = el.style().set_property("display", "block");
            } else {
                _ = cl.add_1("hidden");
                _ = el.style().set_property("display", "none");
            }
        }
    }
}

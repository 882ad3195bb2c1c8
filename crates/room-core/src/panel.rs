use crate::catalog::{object_info, ObjectKind};
use crate::constants::PANEL_AUTO_HIDE_MS;

/// Where the info panel is rendered. The web frontend writes DOM elements;
/// tests record the calls.
pub trait DisplaySink {
    fn set_content(&mut self, title: &str, description: &str, image: Option<&str>);
    fn set_visible(&mut self, visible: bool);
}

/// How long a shown panel stays up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPolicy {
    /// Hover shows and hides the panel; every click schedules a hide.
    Transient { auto_hide_ms: u32 },
    /// Only clicks change the panel; it stays until a click lands on nothing.
    Sticky,
}

impl Default for PanelPolicy {
    fn default() -> Self {
        PanelPolicy::Transient {
            auto_hide_ms: PANEL_AUTO_HIDE_MS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InfoPanelState {
    pub visible: bool,
    pub showing: Option<ObjectKind>,
}

impl InfoPanelState {
    pub fn show(&mut self, kind: ObjectKind, sink: &mut dyn DisplaySink) {
        let info = object_info(kind);
        if self.showing != Some(kind) {
            sink.set_content(info.title, info.description, info.image);
        }
        if !self.visible || self.showing != Some(kind) {
            log::info!("[panel] show {}", kind);
        }
        self.showing = Some(kind);
        self.visible = true;
        sink.set_visible(true);
    }

    pub fn hide(&mut self, sink: &mut dyn DisplaySink) {
        if self.visible {
            log::info!("[panel] hide");
        }
        self.visible = false;
        sink.set_visible(false);
    }
}

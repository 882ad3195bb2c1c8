//! Pointer interaction: hover, click flash and info panel updates.
//!
//! Per object the states are idle, hovering and clicked-flash. A pointer move
//! resets every object to idle and then marks the nearest hit as hovering. A
//! click flashes the hit object and shows its info; the flash is reverted by
//! a timer owned by the caller, which calls [`SceneContext::end_flash`] after
//! [`FlashTicket::revert_after_ms`].

use crate::catalog::ObjectKind;
use crate::constants::*;
use crate::objects::FlashBaseline;
use crate::panel::{DisplaySink, PanelPolicy};
use crate::picking::{nearest_hit, ray_mesh, Hit, Ray};
use crate::scene::SceneContext;
use glam::Vec2;

/// Pointer position in normalized device coordinates, x and y in [-1, 1]
/// with +y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    /// Convert viewport pixel coordinates (origin top-left) to NDC.
    pub fn from_viewport(px: f32, py: f32, width: f32, height: f32) -> Self {
        let w = width.max(1.0);
        let h = height.max(1.0);
        Self {
            ndc: Vec2::new(px / w * 2.0 - 1.0, 1.0 - py / h * 2.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverOutcome {
    pub hovered: Option<ObjectKind>,
    pub cursor: Cursor,
}

/// Deferred revert of a click flash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlashTicket {
    pub kind: ObjectKind,
    pub revert_after_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub clicked: Option<ObjectKind>,
    pub flash: Option<FlashTicket>,
    /// When set, the caller hides the panel after this many milliseconds.
    pub auto_hide_after_ms: Option<u32>,
}

impl SceneContext {
    /// Nearest interactive object along `ray`.
    pub fn pick(&self, ray: &Ray) -> Option<ObjectKind> {
        let candidates = self
            .objects
            .iter()
            .enumerate()
            .filter_map(|(index, obj)| {
                ray_mesh(ray, &obj.mesh, &obj.bounds, &obj.model_matrix())
                    .map(|distance| Hit { index, distance })
            });
        nearest_hit(candidates).map(|hit| self.objects.as_slice()[hit.index].kind)
    }

    pub fn pointer_move(&mut self, pointer: PointerState, sink: &mut dyn DisplaySink) -> HoverOutcome {
        let ray = self.camera.ray_from_ndc(pointer.ndc);
        self.hover_ray(&ray, sink)
    }

    pub fn hover_ray(&mut self, ray: &Ray, sink: &mut dyn DisplaySink) -> HoverOutcome {
        let hit = self.pick(ray);

        for obj in self.objects.iter_mut() {
            obj.hovered = false;
            if obj.flash.is_none() {
                obj.glow_opacity = GLOW_IDLE_OPACITY;
            }
        }
        if let Some(obj) = hit.and_then(|kind| self.objects.get_mut(kind)) {
            obj.hovered = true;
            if obj.flash.is_none() {
                obj.glow_opacity = GLOW_HOVER_OPACITY;
            }
        }

        if hit != self.last_hovered {
            match hit {
                Some(kind) => log::debug!("[pick] hover {}", kind),
                None => log::debug!("[pick] hover cleared"),
            }
            self.last_hovered = hit;
        }

        if let PanelPolicy::Transient { .. } = self.config.panel_policy {
            match hit {
                Some(kind) => self.panel.show(kind, sink),
                None => self.panel.hide(sink),
            }
        }

        HoverOutcome {
            hovered: hit,
            cursor: if hit.is_some() {
                Cursor::Pointer
            } else {
                Cursor::Default
            },
        }
    }

    pub fn click(&mut self, pointer: PointerState, sink: &mut dyn DisplaySink) -> ClickOutcome {
        let ray = self.camera.ray_from_ndc(pointer.ndc);
        self.click_ray(&ray, sink)
    }

    pub fn click_ray(&mut self, ray: &Ray, sink: &mut dyn DisplaySink) -> ClickOutcome {
        let Some(kind) = self.pick(ray) else {
            log::info!("[click] no object hit");
            self.panel.hide(sink);
            return ClickOutcome {
                clicked: None,
                flash: None,
                auto_hide_after_ms: None,
            };
        };

        if let Some(obj) = self.objects.get_mut(kind) {
            // A second click inside the window keeps the first baseline.
            if obj.flash.is_none() {
                obj.flash = Some(FlashBaseline {
                    scale: obj.scale,
                    glow_opacity: obj.glow_opacity,
                });
            }
            obj.scale = CLICK_SCALE;
            obj.glow_opacity = GLOW_CLICK_OPACITY;
        }
        log::info!("[click] {}", kind);
        self.panel.show(kind, sink);

        ClickOutcome {
            clicked: Some(kind),
            flash: Some(FlashTicket {
                kind,
                revert_after_ms: FLASH_REVERT_MS,
            }),
            auto_hide_after_ms: match self.config.panel_policy {
                PanelPolicy::Transient { auto_hide_ms } => Some(auto_hide_ms),
                PanelPolicy::Sticky => None,
            },
        }
    }

    /// Restore the pre-click scale and glow. Overwrites whatever hover set in
    /// the meantime; a revert for an object no longer flashing does nothing.
    pub fn end_flash(&mut self, kind: ObjectKind) {
        if let Some(obj) = self.objects.get_mut(kind) {
            if let Some(baseline) = obj.flash.take() {
                obj.scale = baseline.scale;
                obj.glow_opacity = baseline.glow_opacity;
            }
        }
    }

    /// Timer-driven hide. Not cancelled by later clicks.
    pub fn auto_hide_panel(&mut self, sink: &mut dyn DisplaySink) {
        self.panel.hide(sink);
    }
}

//! Host-Callbacks, gespeist aus den Effekten eines Events.

use super::events::{InteractionEffect, MouseButton};
use crate::core::WindowLevel;
use glam::DVec3;

type CrosshairsMovedFn = Box<dyn FnMut(DVec3)>;
type WindowLevelsChangedFn = Box<dyn FnMut(WindowLevel)>;
type DoubleClickFn = Box<dyn FnMut(MouseButton, usize)>;

/// Optionale Benachrichtigungen an den Host.
#[derive(Default)]
pub struct InteractionCallbacks {
    /// Erhält die neue Fadenkreuz-Position
    pub on_crosshairs_moved: Option<CrosshairsMovedFn>,
    pub on_window_levels_changed: Option<WindowLevelsChangedFn>,
    /// Taste und Viewport-Index
    pub on_double_click: Option<DoubleClickFn>,
}

impl InteractionCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_crosshairs_moved(mut self, callback: impl FnMut(DVec3) + 'static) -> Self {
        self.on_crosshairs_moved = Some(Box::new(callback));
        self
    }

    pub fn with_window_levels_changed(
        mut self,
        callback: impl FnMut(WindowLevel) + 'static,
    ) -> Self {
        self.on_window_levels_changed = Some(Box::new(callback));
        self
    }

    pub fn with_double_click(mut self, callback: impl FnMut(MouseButton, usize) + 'static) -> Self {
        self.on_double_click = Some(Box::new(callback));
        self
    }

    /// Ruft die passenden Callbacks in Effekt-Reihenfolge auf.
    pub fn dispatch(&mut self, effects: &[InteractionEffect], crosshair_world: DVec3) {
        for effect in effects {
            match *effect {
                InteractionEffect::CrosshairsMoved => {
                    if let Some(callback) = self.on_crosshairs_moved.as_mut() {
                        callback(crosshair_world);
                    }
                }
                InteractionEffect::WindowLevelsChanged { window } => {
                    if let Some(callback) = self.on_window_levels_changed.as_mut() {
                        callback(window);
                    }
                }
                InteractionEffect::DoubleClick { button, viewport } => {
                    if let Some(callback) = self.on_double_click.as_mut() {
                        callback(button, viewport);
                    }
                }
                InteractionEffect::RenderRequested { .. }
                | InteractionEffect::OverlayRedrawRequested { .. }
                | InteractionEffect::SliceChanged { .. } => {}
            }
        }
    }
}

impl std::fmt::Debug for InteractionCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionCallbacks")
            .field("on_crosshairs_moved", &self.on_crosshairs_moved.is_some())
            .field("on_window_levels_changed", &self.on_window_levels_changed.is_some())
            .field("on_double_click", &self.on_double_click.is_some())
            .finish()
    }
}

//! Kamera-Anpassungen (Pan, Zoom, Window/Level, Slice) als Strategien pro Operation.
//!
//! Jede Strategie erzeugt beim Start ihren Gesten-Zustand und verarbeitet danach
//! jede Zeigerbewegung. Zugriff auf Viewports und Effekte läuft über `ViewportContext`.

pub mod pan;
pub mod slice;
pub mod window_level;
pub mod zoom;

use super::events::InteractionEffect;
use crate::core::{CrosshairOverlay, MprViewport};
use crate::error::{InteractionError, Result};
use crate::shared::InteractionOptions;
use glam::DVec2;

pub use pan::PanAdjuster;
pub use slice::SliceAdjuster;
pub use window_level::WindowLevelAdjuster;
pub use zoom::ZoomAdjuster;

/// Bündelt die gemeinsamen Parameter für die Verarbeitung eines Viewport-Events.
pub struct ViewportContext<'a> {
    /// Alle verknüpften Viewports (Arena, Zugriff per Index)
    pub viewports: &'a mut [MprViewport],
    /// Index des Viewports, der das Event empfangen hat
    pub index: usize,
    pub options: &'a InteractionOptions,
    pub effects: &'a mut Vec<InteractionEffect>,
}

impl<'a> ViewportContext<'a> {
    pub fn new(
        viewports: &'a mut [MprViewport],
        index: usize,
        options: &'a InteractionOptions,
        effects: &'a mut Vec<InteractionEffect>,
    ) -> Self {
        Self {
            viewports,
            index,
            options,
            effects,
        }
    }

    /// Der Viewport, der das Event empfangen hat.
    pub fn active(&self) -> &MprViewport {
        &self.viewports[self.index]
    }

    pub fn active_mut(&mut self) -> &mut MprViewport {
        &mut self.viewports[self.index]
    }

    /// Overlay des aktiven Viewports; ein fehlendes Overlay bricht die Geste ab.
    pub fn active_overlay(&self) -> Result<&dyn CrosshairOverlay> {
        self.active()
            .overlay()
            .ok_or(InteractionError::MissingOverlay {
                viewport: self.index,
            })
    }

    pub fn active_overlay_mut(&mut self) -> Result<&mut (dyn CrosshairOverlay + 'static)> {
        let index = self.index;
        self.viewports[index]
            .overlay_mut()
            .ok_or(InteractionError::MissingOverlay { viewport: index })
    }

    /// Fügt einen Effekt hinzu (Duplikate werden ignoriert).
    pub fn emit(&mut self, effect: InteractionEffect) {
        super::events::push_unique(self.effects, effect);
    }

    /// Fordert ein Neu-Rendern des aktiven Viewports an.
    pub fn request_render(&mut self) {
        let viewport = self.index;
        self.emit(InteractionEffect::RenderRequested { viewport });
    }
}

/// Strategie einer Kamera-Anpassung.
pub trait CameraAdjuster {
    /// Gesten-Zustand, der bis zum Loslassen lebt.
    type State;

    /// Beginnt die Geste an `position`.
    fn on_start(&self, ctx: &mut ViewportContext<'_>, position: DVec2) -> Result<Self::State>;

    /// Verarbeitet eine Zeigerbewegung während der Geste.
    fn on_move(
        &self,
        ctx: &mut ViewportContext<'_>,
        state: &mut Self::State,
        position: DVec2,
    ) -> Result<()>;
}

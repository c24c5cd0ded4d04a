//! Window/Level per Drag, gleichzeitig für alle Viewports.

use super::{CameraAdjuster, ViewportContext};
use crate::app::events::{push_unique, InteractionEffect};
use crate::app::state::WindowLevelState;
use crate::core::WindowLevel;
use crate::error::Result;
use crate::shared::WINDOW_LEVEL_NORMALIZATION;
use glam::DVec2;

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLevelAdjuster;

impl WindowLevelAdjuster {
    /// Pixel → Intensität: Dynamikbereich / 1024, mal `level_scale`.
    fn multiplier(ctx: &ViewportContext<'_>, state: &WindowLevelState) -> f64 {
        let dynamic_range = ctx
            .active()
            .volume()
            .map(|volume| volume.dynamic_range())
            .unwrap_or_else(|| {
                let [low, high] = state.initial_mapping_range;
                high - low
            });
        let dynamic_range = if dynamic_range > 0.0 {
            dynamic_range
        } else {
            WINDOW_LEVEL_NORMALIZATION
        };
        dynamic_range / WINDOW_LEVEL_NORMALIZATION * state.level_scale
    }
}

impl CameraAdjuster for WindowLevelAdjuster {
    type State = WindowLevelState;

    fn on_start(
        &self,
        ctx: &mut ViewportContext<'_>,
        position: DVec2,
    ) -> Result<WindowLevelState> {
        let range = ctx.active().mapping_range();
        Ok(WindowLevelState {
            start_position: position,
            initial_mapping_range: range,
            window: WindowLevel::from_range(range),
            level_scale: ctx.options.level_scale,
        })
    }

    /// Horizontal ändert die Breite, vertikal das Zentrum.
    fn on_move(
        &self,
        ctx: &mut ViewportContext<'_>,
        state: &mut WindowLevelState,
        position: DVec2,
    ) -> Result<()> {
        let multiplier = Self::multiplier(ctx, state);
        let dx = ((position.x - state.start_position.x) * multiplier).round();
        let dy = ((position.y - state.start_position.y) * multiplier).round();

        let window = WindowLevel::new(state.window.width + dx, state.window.center - dy).clamped();
        if window == state.window {
            return Ok(());
        }

        state.window = window;
        state.start_position = position;

        let range = window.to_range();
        for (index, viewport) in ctx.viewports.iter_mut().enumerate() {
            viewport.set_mapping_range(range);
            push_unique(ctx.effects, InteractionEffect::RenderRequested { viewport: index });
        }
        log::trace!("Window/Level: Breite {:.1}, Zentrum {:.1}", window.width, window.center);
        ctx.emit(InteractionEffect::WindowLevelsChanged { window });
        Ok(())
    }
}

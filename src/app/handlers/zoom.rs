//! Zoom per vertikalem Drag.

use super::{CameraAdjuster, ViewportContext};
use crate::app::state::ZoomState;
use crate::app::use_cases::crosshairs::refresh_overlay;
use crate::error::Result;
use crate::shared::ZOOM_FACTOR;
use glam::DVec2;

#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomAdjuster;

impl CameraAdjuster for ZoomAdjuster {
    type State = ZoomState;

    /// Skalierung pro Pixel: `ZOOM_FACTOR / Höhe`, bei Perspektive zusätzlich mal
    /// Far-Clipping-Distanz.
    fn on_start(&self, ctx: &mut ViewportContext<'_>, position: DVec2) -> Result<ZoomState> {
        let direction = ctx.options.zoom_direction();
        let viewport = ctx.active();
        let height = viewport.size().y.max(1.0);

        let zoom_scale = if viewport.camera.parallel_projection {
            ZOOM_FACTOR / height * direction
        } else {
            ZOOM_FACTOR * viewport.camera.clipping_range[1] / height * direction
        };

        Ok(ZoomState {
            previous_position: position,
            zoom_scale,
        })
    }

    fn on_move(
        &self,
        ctx: &mut ViewportContext<'_>,
        state: &mut ZoomState,
        position: DVec2,
    ) -> Result<()> {
        let dy = state.previous_position.y - position.y;
        state.previous_position = position;
        if dy == 0.0 {
            return Ok(());
        }
        let k = dy * state.zoom_scale;

        let viewport = ctx.active_mut();
        let camera = &mut viewport.camera;
        if camera.parallel_projection {
            let factor = 1.0 - k;
            if factor <= 0.0 {
                log::debug!("Zoom-Schritt übersprungen (Faktor {:.3})", factor);
                return Ok(());
            }
            camera.parallel_scale *= factor;
        } else {
            let step = camera.direction_of_projection() * k;
            camera.position += step;
            if !camera.freeze_focal_point {
                camera.focal_point += step;
            }
        }
        viewport.reset_clipping_range();

        ctx.request_render();
        let index = ctx.index;
        refresh_overlay(ctx.viewports, index, ctx.effects);
        Ok(())
    }
}

//! Pan: Kamera parallel zur Bildebene verschieben.

use super::{CameraAdjuster, ViewportContext};
use crate::app::state::PanState;
use crate::app::use_cases::crosshairs::refresh_overlay;
use crate::error::Result;
use glam::DVec2;

#[derive(Debug, Clone, Copy, Default)]
pub struct PanAdjuster;

impl CameraAdjuster for PanAdjuster {
    type State = PanState;

    fn on_start(&self, _ctx: &mut ViewportContext<'_>, position: DVec2) -> Result<PanState> {
        Ok(PanState {
            previous_position: position,
        })
    }

    /// Parallelprojektion: Pixel-Delta relativ zur Viewport-Höhe, skaliert mit der
    /// sichtbaren Höhe. Perspektive: Entprojektion beider Positionen in der Tiefe
    /// des Fokuspunkts.
    fn on_move(
        &self,
        ctx: &mut ViewportContext<'_>,
        state: &mut PanState,
        position: DVec2,
    ) -> Result<()> {
        let last = state.previous_position;
        state.previous_position = position;
        if last == position {
            return Ok(());
        }

        let viewport = ctx.active_mut();
        let size = viewport.size();

        let delta = if viewport.camera.parallel_projection {
            viewport.camera.orthogonalize_view_up();
            let up = viewport.camera.view_up;
            let right = viewport.camera.view_plane_normal().cross(up);

            let height = size.y.max(1.0);
            let scale = viewport.camera.parallel_scale * 2.0;
            let dx = (position.x - last.x) / height * scale;
            let dy = (last.y - position.y) / height * scale;
            right * dx + up * dy
        } else {
            let depth = viewport.world_to_display(viewport.camera.focal_point).z;
            let world = viewport.display_to_world(position.extend(depth));
            let last_world = viewport.display_to_world(last.extend(depth));
            last_world - world
        };

        viewport.camera.translate(delta);
        viewport.reset_clipping_range();

        ctx.request_render();
        let index = ctx.index;
        refresh_overlay(ctx.viewports, index, ctx.effects);
        Ok(())
    }
}

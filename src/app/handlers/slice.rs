//! Slice-Scroll per vertikalem Drag.

use super::{CameraAdjuster, ViewportContext};
use crate::app::state::SliceState;
use crate::app::use_cases::crosshairs::scroll_to_slice;
use crate::error::Result;
use crate::shared::SLICE_SCROLL_SPEED;
use glam::DVec2;

#[derive(Debug, Clone, Copy, Default)]
pub struct SliceAdjuster;

impl CameraAdjuster for SliceAdjuster {
    type State = SliceState;

    fn on_start(&self, _ctx: &mut ViewportContext<'_>, position: DVec2) -> Result<SliceState> {
        Ok(SliceState {
            previous_position: position,
        })
    }

    /// Schrittweite: Pixel × `SLICE_SCROLL_SPEED` × Spannweite des Slice-Bereichs.
    /// Am Bereichsende wird nichts mehr ausgelöst.
    fn on_move(
        &self,
        ctx: &mut ViewportContext<'_>,
        state: &mut SliceState,
        position: DVec2,
    ) -> Result<()> {
        let dy = position.y - state.previous_position.y;
        if dy == 0.0 {
            state.previous_position = position;
            return Ok(());
        }

        let viewport = ctx.active();
        let [low, high] = viewport.slice_range();
        let current = viewport.slice();
        let slice = (current + dy * SLICE_SCROLL_SPEED * (high - low)).clamp(low, high);

        if slice != current {
            scroll_to_slice(ctx, slice)?;
        }
        state.previous_position = position;
        Ok(())
    }
}

//! Mausrad: Slice-Schritt im aktiven Viewport.

use super::crosshairs::scroll_to_slice;
use crate::app::handlers::ViewportContext;
use crate::error::Result;
use crate::shared::options::WHEEL_SLICE_STEP_FALLBACK;

/// Scrollt um einen Schritt in Richtung von `delta_y`.
///
/// Schrittweite: konfigurierter Wert, sonst kleinster Voxelabstand des Volumens.
/// Läuft wie der Drag-Scroll über `scroll_to_slice` (inkl. Umlenkung auf das
/// Fadenkreuz bei aktiver Referenzlinie).
pub fn scroll_wheel(ctx: &mut ViewportContext<'_>, delta_y: f64) -> Result<()> {
    if delta_y == 0.0 || delta_y.is_nan() {
        return Ok(());
    }

    let viewport = ctx.active();
    let step = ctx.options.wheel_slice_step.unwrap_or_else(|| {
        viewport
            .volume()
            .map(|volume| volume.min_spacing())
            .filter(|spacing| *spacing > 0.0)
            .unwrap_or(WHEEL_SLICE_STEP_FALLBACK)
    });

    let [low, high] = viewport.slice_range();
    let current = viewport.slice();
    let slice = (current + step * delta_y.signum()).clamp(low, high);
    if slice == current {
        log::trace!("Mausrad am Slice-Bereichsende ignoriert");
        return Ok(());
    }

    scroll_to_slice(ctx, slice)
}

//! Passive Hover-Hervorhebung greifbarer Linien und Dreh-Griffe.

use crate::app::handlers::ViewportContext;
use crate::app::resolver::{handle_grabbed, nearest_line, within_center, HitTolerance};
use glam::DVec2;

/// Aktualisiert `selected`-Flags von Linien und Dreh-Griffen unter dem Zeiger.
///
/// Im Zentrum werden beide Linien hervorgehoben. Außerhalb hat ein Dreh-Griff
/// Vorrang vor der näheren Linie. Neu gezeichnet wird nur bei einer Änderung.
/// Gibt `true` zurück, wenn sich etwas geändert hat.
pub fn update_hover(ctx: &mut ViewportContext<'_>, position: DVec2) -> bool {
    let tolerance = HitTolerance::from_options(ctx.options);
    let Some(overlay) = ctx.active_mut().overlay_mut() else {
        return false;
    };

    let mut selected_lines = [false; 2];
    let mut selected_handles = [false; 2];

    if within_center(overlay, position, tolerance) {
        selected_lines = [true, true];
    } else {
        let lines = overlay.reference_lines();
        for (index, line) in lines.iter().enumerate() {
            selected_handles[index] = handle_grabbed(line, position, tolerance);
        }

        if !selected_handles.contains(&true) {
            if let Some(index) = nearest_line(lines, position, tolerance) {
                selected_lines[index] = true;
            }
        }
    }

    let mut changed = false;
    for (index, line) in overlay.reference_lines_mut().iter_mut().enumerate() {
        if line.selected != selected_lines[index] {
            line.selected = selected_lines[index];
            changed = true;
        }
        if line.rotate_handles.selected != selected_handles[index] {
            line.rotate_handles.selected = selected_handles[index];
            changed = true;
        }
    }

    if changed {
        overlay.request_redraw();
        log::trace!(
            "Hover: Linien {:?}, Griffe {:?}",
            selected_lines,
            selected_handles
        );
        let viewport = ctx.index;
        ctx.emit(crate::app::events::InteractionEffect::OverlayRedrawRequested { viewport });
    }
    changed
}

//! Use-Case-Funktionen für das gemeinsame 3D-Fadenkreuz.
//!
//! Alle Schreibzugriffe auf die Fadenkreuz-Position laufen hier durch und
//! aktualisieren vor der Rückkehr sämtliche Viewports.

use crate::app::events::InteractionEffect;
use crate::app::handlers::ViewportContext;
use crate::app::resolver::CrosshairHit;
use crate::core::{
    derive_line, nearest_focal_point, rotation_angle, snap_to_line, LineGeometry, MprViewport,
    VoxelSample,
};
use crate::error::{InteractionError, Result};
use glam::{DMat4, DVec2, DVec3};

/// Abstand, ab dem eine Fokusebene als verschoben gilt.
const PLANE_EPSILON: f64 = 1e-9;

/// Zeilen mit weniger Höhenunterschied (Pixel) gelten beim Scrollen als horizontal.
const HORIZONTAL_LINE_TOLERANCE_PX: f64 = 1.0;

/// Richtung beim Verschieben des Fadenkreuzes entlang einer Referenzlinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Zum oberen (bei horizontaler Linie: linken) Linienende
    Forwards,
    Backwards,
}

/// Setzt das Fadenkreuz auf `world`: Cache aller Viewports, Fokusebenen aller
/// Viewports durch den Punkt, danach Neuberechnung aller Overlays.
pub fn sync_crosshairs(
    viewports: &mut [MprViewport],
    world: DVec3,
    effects: &mut Vec<InteractionEffect>,
) {
    for (index, viewport) in viewports.iter_mut().enumerate() {
        viewport.set_crosshair_world(world);
        let moved = viewport.align_focal_plane(world);
        if moved.abs() > PLANE_EPSILON {
            viewport.reset_clipping_range();
            push(effects, InteractionEffect::RenderRequested { viewport: index });
        }
    }
    refresh_overlays(viewports, effects);
}

/// Berechnet Zentrum und Referenzlinien eines Overlays neu.
///
/// Gibt `false` zurück, wenn der Viewport kein Overlay hat.
pub fn refresh_overlay(
    viewports: &mut [MprViewport],
    index: usize,
    effects: &mut Vec<InteractionEffect>,
) -> bool {
    let Some(viewport) = viewports.get(index) else {
        return false;
    };
    if viewport.overlay().is_none() {
        log::debug!("Viewport {} ohne Overlay, Referenzlinien übersprungen", index);
        return false;
    }

    let crosshair = viewport.crosshair_world();
    let center = viewport.world_to_display(crosshair).truncate();

    let mut sources = (0..viewports.len()).filter(|&other| other != index);
    let mut next_line = || match sources.next() {
        Some(other) => derive_line(viewport, viewports[other].slice_normal(), crosshair, other),
        None => LineGeometry::degenerate(center, None),
    };
    let lines = [next_line(), next_line()];

    if let Some(overlay) = viewports[index].overlay_mut() {
        overlay.set_geometry(center, lines);
        overlay.request_redraw();
    }
    push(effects, InteractionEffect::OverlayRedrawRequested { viewport: index });
    true
}

/// Berechnet alle Overlays neu.
pub fn refresh_overlays(viewports: &mut [MprViewport], effects: &mut Vec<InteractionEffect>) {
    for index in 0..viewports.len() {
        refresh_overlay(viewports, index, effects);
    }
}

/// Verschiebt das Fadenkreuz auf die Display-Position `position` im aktiven Viewport.
///
/// Die Position wird auf der vorderen Slab-Fläche entprojiziert und um die halbe
/// Slab-Dicke in Blickrichtung versetzt, also in die Mitte des Slabs.
pub fn move_crosshairs(ctx: &mut ViewportContext<'_>, position: DVec2) -> DVec3 {
    let viewport = ctx.active();
    let near_face = viewport.display_to_world(position.extend(0.0));
    let world = near_face + viewport.slice_normal() * (viewport.slab_thickness() / 2.0);

    log::trace!("Fadenkreuz → {:?}", world);
    sync_crosshairs(ctx.viewports, world, ctx.effects);
    world
}

/// Projiziert `position` auf die Referenzlinie `line_index` des aktiven Overlays.
///
/// Eine degenerierte Linie lässt die Position unverändert.
pub fn snap_position_to_line(
    ctx: &ViewportContext<'_>,
    position: DVec2,
    line_index: usize,
) -> Result<DVec2> {
    let overlay = ctx.active_overlay()?;
    let line = overlay.reference_lines()[line_index % 2];
    Ok(snap_to_line(position, line.points).unwrap_or(position))
}

/// Dreht die Ebenen aller anderen Viewports um die Blickachse des aktiven Viewports.
///
/// Der Winkel ergibt sich aus `previous → new` um das Fadenkreuz-Zentrum. Der
/// aktive Viewport und die Fadenkreuz-Position bleiben unverändert; die Fokuspunkte
/// der gedrehten Kameras werden danach wieder auf das Fadenkreuz gelegt.
pub fn rotate_crosshairs(ctx: &mut ViewportContext<'_>, previous: DVec2, new: DVec2) -> Result<()> {
    if previous == new {
        return Ok(());
    }

    let center = ctx.active_overlay()?.center();
    let angle = rotation_angle(center, previous, new);
    if angle == 0.0 {
        return Ok(());
    }
    let axis = -ctx.active().slice_normal();

    let active = ctx.index;
    for (index, viewport) in ctx.viewports.iter_mut().enumerate() {
        if index == active {
            continue;
        }

        let crosshair = viewport.crosshair_world();
        let pivot = crosshair + (crosshair - viewport.initial_crosshair_world());
        let matrix = DMat4::from_translation(pivot)
            * DMat4::from_axis_angle(axis, angle)
            * DMat4::from_translation(-pivot);

        viewport.camera.apply_transform(&matrix);
        let (normal, view_up) = (viewport.slice_normal(), viewport.view_up());
        viewport.set_orientation(normal, view_up);

        viewport.camera.focal_point = nearest_focal_point(
            viewport.camera.position,
            viewport.camera.focal_point,
            crosshair,
        );
        viewport.reset_clipping_range();
        push(ctx.effects, InteractionEffect::RenderRequested { viewport: index });
    }

    log::trace!("Fadenkreuz gedreht um {:.4} rad", angle);
    refresh_overlays(ctx.viewports, ctx.effects);
    Ok(())
}

/// Verschiebt das Fadenkreuz entlang der *anderen* Referenzlinie um einen Voxel-Schritt.
///
/// Die Schrittweite ist die Voxel-Diagonale in Pixeln; das neue Zentrum bleibt
/// innerhalb der Bounding-Box der Linie, also zwischen ihren Endpunkten.
pub fn scroll_crosshairs(
    ctx: &mut ViewportContext<'_>,
    line_index: usize,
    direction: ScrollDirection,
) -> Result<()> {
    let viewport = ctx.active();
    let volume = viewport
        .volume()
        .ok_or(InteractionError::MissingVolume { viewport: ctx.index })?;
    let overlay = ctx.active_overlay()?;

    let other = overlay.reference_lines()[1 - line_index % 2];
    if other.is_degenerate() {
        return Ok(());
    }

    let [a, b] = other.points;
    let (from, to) = if (a.y - b.y).abs() < HORIZONTAL_LINE_TOLERANCE_PX {
        if a.x > b.x { (a, b) } else { (b, a) }
    } else if a.y < b.y {
        (a, b)
    } else {
        (b, a)
    };

    let mut unit = (to - from).normalize_or_zero();
    if direction == ScrollDirection::Backwards {
        unit = -unit;
    }

    let world_per_pixel = viewport.camera.world_per_pixel(viewport.size());
    if world_per_pixel <= f64::EPSILON {
        return Ok(());
    }
    let increment = volume.diagonal_spacing() / world_per_pixel;

    let target = overlay.center() + unit * increment;
    let clamped = target.clamp(a.min(b), a.max(b));

    move_crosshairs(ctx, clamped);
    Ok(())
}

/// Setzt den Slice des aktiven Viewports, mit Umlenkung auf das Fadenkreuz.
///
/// Ist eine Referenzlinie aktiv, wird stattdessen das Fadenkreuz entlang der
/// anderen Linie verschoben. Sonst läuft der normale Slice-Scroll, sofern nicht
/// abgeschaltet; das Fadenkreuz folgt dabei entlang der Normale.
pub fn scroll_to_slice(ctx: &mut ViewportContext<'_>, slice: f64) -> Result<()> {
    let active_line = ctx
        .active_overlay()?
        .reference_lines()
        .iter()
        .position(|line| line.active);

    let current = ctx.active().slice();

    if let Some(line_index) = active_line {
        let direction = if current - slice > 0.0 {
            ScrollDirection::Forwards
        } else {
            ScrollDirection::Backwards
        };
        scroll_crosshairs(ctx, line_index, direction)?;
        ctx.emit(InteractionEffect::CrosshairsMoved);
        return Ok(());
    }

    if ctx.options.disable_normal_mpr_scroll {
        return Ok(());
    }

    let index = ctx.index;
    let viewport = ctx.active_mut();
    let normal = viewport.slice_normal();
    let crosshair = viewport.crosshair_world() + normal * (slice - current);
    viewport.scroll_to_slice(slice);
    viewport.reset_clipping_range();

    ctx.emit(InteractionEffect::SliceChanged {
        viewport: index,
        slice,
    });
    ctx.request_render();
    sync_crosshairs(ctx.viewports, crosshair, ctx.effects);
    ctx.emit(InteractionEffect::CrosshairsMoved);
    Ok(())
}

/// Setzt Auswahl-/Aktiv-Flags nach einem Treffertest beim Tastendruck.
///
/// Die Linien aller anderen Viewports werden zuerst deaktiviert. Overlays fehlen
/// dort nur mit Log-Meldung; das Overlay des aktiven Viewports ist Pflicht.
pub fn apply_hit_selection(ctx: &mut ViewportContext<'_>, hit: CrosshairHit) -> Result<()> {
    deactivate_other_viewports(ctx);

    let lines = ctx.active_overlay_mut()?.reference_lines_mut();
    match hit {
        CrosshairHit::Center => {
            for line in lines.iter_mut() {
                line.selected = true;
            }
        }
        CrosshairHit::RotateHandle { line_index } => {
            lines[line_index].rotate_handles.selected = true;
            set_active_line(lines, line_index);
        }
        CrosshairHit::Line { line_index } => {
            lines[line_index].selected = true;
            set_active_line(lines, line_index);
        }
        CrosshairHit::Miss => {
            for line in lines.iter_mut() {
                line.active = false;
            }
        }
    }

    ctx.active_overlay_mut()?.request_redraw();
    let viewport = ctx.index;
    ctx.emit(InteractionEffect::OverlayRedrawRequested { viewport });
    Ok(())
}

/// Hebt Hover-/Drag-Hervorhebung im aktiven Viewport auf; `active` bleibt.
pub fn clear_selection(ctx: &mut ViewportContext<'_>) {
    let Ok(overlay) = ctx.active_overlay_mut() else {
        return;
    };
    for line in overlay.reference_lines_mut().iter_mut() {
        line.selected = false;
        line.rotate_handles.selected = false;
    }
    overlay.request_redraw();
    let viewport = ctx.index;
    ctx.emit(InteractionEffect::OverlayRedrawRequested { viewport });
}

/// Skalarwert und Voxel-Index am Fadenkreuz des Viewports `index`.
///
/// `Ok(None)`, wenn das Volumen keine Skalardaten trägt.
pub fn crosshair_value(viewports: &[MprViewport], index: usize) -> Result<Option<VoxelSample>> {
    let viewport = viewports.get(index).ok_or(InteractionError::InvalidViewport {
        index,
        count: viewports.len(),
    })?;
    let volume = viewport
        .volume()
        .ok_or(InteractionError::MissingVolume { viewport: index })?;
    Ok(volume.sample(viewport.crosshair_world()))
}

fn set_active_line(lines: &mut [crate::core::ReferenceLine; 2], line_index: usize) {
    for (index, line) in lines.iter_mut().enumerate() {
        line.active = index == line_index;
    }
}

fn deactivate_other_viewports(ctx: &mut ViewportContext<'_>) {
    let active = ctx.index;
    for (index, viewport) in ctx.viewports.iter_mut().enumerate() {
        if index == active {
            continue;
        }
        match viewport.overlay_mut() {
            Some(overlay) => {
                for line in overlay.reference_lines_mut().iter_mut() {
                    line.active = false;
                }
            }
            None => log::debug!("Viewport {} ohne Overlay beim Deaktivieren übersprungen", index),
        }
    }
}

fn push(effects: &mut Vec<InteractionEffect>, effect: InteractionEffect) {
    crate::app::events::push_unique(effects, effect);
}

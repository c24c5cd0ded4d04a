//! Ableitung der Referenzlinien- und Dreh-Griff-Geometrie aus Kamera und Fadenkreuz.

use super::geometry::{clip_line_to_rect, MIN_LINE_LENGTH};
use super::overlay::LineGeometry;
use super::viewport::MprViewport;
use glam::{DVec2, DVec3};

/// Position der Dreh-Griffe als Anteil der halben Linienlänge.
pub const ROTATE_HANDLE_FRACTION: f64 = 0.6;

/// Berechnet die Linie, in der die Ebene eines anderen Viewports (`other_normal`,
/// durch `crosshair`) die Ebene von `viewport` schneidet.
///
/// Parallele Ebenen oder eine Linie außerhalb des Viewports ergeben eine
/// degenerierte Linie im Zentrum.
pub fn derive_line(
    viewport: &MprViewport,
    other_normal: DVec3,
    crosshair: DVec3,
    source_viewport: usize,
) -> LineGeometry {
    let size = viewport.size();
    let center = viewport.world_to_display(crosshair).truncate();

    let world_direction = viewport.slice_normal().cross(other_normal);
    let Some(world_direction) = world_direction.try_normalize() else {
        return LineGeometry::degenerate(center, Some(source_viewport));
    };

    let reach = viewport.camera.distance().max(1.0);
    let far = viewport
        .world_to_display(crosshair + world_direction * reach)
        .truncate();
    let direction = far - center;
    if direction.length() < MIN_LINE_LENGTH {
        return LineGeometry::degenerate(center, Some(source_viewport));
    }

    let Some(points) = clip_line_to_rect(center, direction, size) else {
        return LineGeometry::degenerate(center, Some(source_viewport));
    };

    LineGeometry {
        points,
        rotate_handles: rotate_handle_points(center, points),
        source_viewport: Some(source_viewport),
    }
}

/// Griffe auf beiden Linienhälften, `ROTATE_HANDLE_FRACTION` vom Zentrum entfernt.
pub fn rotate_handle_points(center: DVec2, points: [DVec2; 2]) -> [DVec2; 2] {
    points.map(|end| center + (end - center) * ROTATE_HANDLE_FRACTION)
}

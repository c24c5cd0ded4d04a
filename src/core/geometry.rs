//! Rein-mathematische Geometrie-Hilfen für Fadenkreuz und Referenzlinien.
//!
//! Alle 2D-Funktionen arbeiten in Display-Koordinaten (Pixel, Ursprung unten links).
//! Degenerierte Eingaben (Linie der Länge 0, zusammenfallende Punkte) liefern
//! "kein Treffer" statt eines Fehlers: Distanz `f64::INFINITY`, Projektion `None`,
//! Winkel `0.0`.

use glam::{DVec2, DVec3};

/// Minimale Linienlänge, ab der eine Linie als nicht-degeneriert gilt.
pub const MIN_LINE_LENGTH: f64 = 1e-9;

/// Senkrechter Abstand eines Punktes zur unendlichen Geraden durch `line`.
///
/// Dreiecksflaechen-Methode: Fläche aus allen drei Punkten, Höhe = 2·Fläche / Basis.
/// Die Referenzlinien spannen den ganzen Viewport auf, deshalb wird nicht auf das
/// Segment geklemmt.
pub fn distance_from_line(line: [DVec2; 2], point: DVec2) -> f64 {
    let [a, b] = line;
    let c = point;

    let base = a.distance(b);
    if base < MIN_LINE_LENGTH {
        return f64::INFINITY;
    }

    let area = (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs() / 2.0;
    2.0 * area / base
}

/// Orthogonale Projektion von `point` auf die unendliche Gerade durch `line`.
///
/// Liefert `None` für eine degenerierte Linie.
pub fn snap_to_line(point: DVec2, line: [DVec2; 2]) -> Option<DVec2> {
    let [start, end] = line;
    let along = end - start;
    let length = along.length();
    if length < MIN_LINE_LENGTH {
        return None;
    }

    let unit = along / length;
    let distance_along = (point - start).dot(along) / length;
    Some(start + unit * distance_along)
}

/// Vorzeichenbehafteter Drehwinkel (Radiant) von `center→from` nach `center→to`.
///
/// Betrag über die Skalarprodukt-Formel, Vorzeichen über die 2D-Determinante:
/// positive Determinante negiert den Winkel. Das ergibt einen rechtshändigen
/// Drehsinn um die Blickachse.
pub fn rotation_angle(center: DVec2, from: DVec2, to: DVec2) -> f64 {
    let to_previous = from - center;
    let to_new = to - center;

    let lengths = to_previous.length() * to_new.length();
    if lengths < MIN_LINE_LENGTH {
        return 0.0;
    }

    let cosine = (to_previous.dot(to_new) / lengths).clamp(-1.0, 1.0);
    let angle = cosine.acos();

    let determinant = to_new.x * to_previous.y - to_new.y * to_previous.x;
    if determinant > 0.0 {
        -angle
    } else {
        angle
    }
}

/// Nächster Punkt auf der Sichtlinie `position→focal_point` zu `target`.
///
/// Dient nach einer Rotation als neuer Fokuspunkt, damit der Fokus wieder in der
/// Ebene des Fadenkreuzes liegt. Bei zusammenfallender Position und Fokuspunkt
/// bleibt der Fokuspunkt unverändert.
pub fn nearest_focal_point(position: DVec3, focal_point: DVec3, target: DVec3) -> DVec3 {
    let line_of_sight = focal_point - position;
    let length_squared = line_of_sight.length_squared();
    if length_squared < MIN_LINE_LENGTH * MIN_LINE_LENGTH {
        return focal_point;
    }

    let to_target = target - position;
    position + line_of_sight * (to_target.dot(line_of_sight) / length_squared)
}

/// Schneidet die unendliche Gerade `center + t·direction` mit dem Rechteck
/// `[0, size.x] × [0, size.y]`.
///
/// Liefert die beiden Randpunkte oder `None`, wenn die Gerade das Rechteck verfehlt
/// oder die Richtung degeneriert ist.
pub fn clip_line_to_rect(center: DVec2, direction: DVec2, size: DVec2) -> Option<[DVec2; 2]> {
    let direction = direction.try_normalize()?;

    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    for axis in 0..2 {
        let origin = center[axis];
        let delta = direction[axis];
        let (low, high) = (0.0, size[axis]);

        if delta.abs() < MIN_LINE_LENGTH {
            if origin < low || origin > high {
                return None;
            }
            continue;
        }

        let t0 = (low - origin) / delta;
        let t1 = (high - origin) / delta;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
    }

    if t_min > t_max {
        return None;
    }

    Some([center + direction * t_min, center + direction * t_max])
}

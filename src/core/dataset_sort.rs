//! Sortierung von Schicht-Datensätzen entlang der Scan-Achse.
//!
//! Liefert die Schichtreihenfolge, den mittleren Schichtabstand und den Ursprung
//! (Position der ersten Schicht) für den Volumenaufbau.

use glam::DVec3;

/// Positionen, deren Abstand entlang der Scan-Achse darunter liegt, gelten als gleich.
pub const DUPLICATE_POSITION_EPSILON: f64 = 1e-6;

/// Umgang mit Schichten an identischer Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePositionPolicy {
    /// Nur die erste Schicht je Position behalten
    #[default]
    Drop,
    /// Alle Schichten behalten
    Keep,
}

/// Datensatz mit Bildposition (Weltposition der ersten Bildzeile/-spalte).
pub trait ImagePositioned {
    fn image_position(&self) -> DVec3;
}

impl ImagePositioned for DVec3 {
    fn image_position(&self) -> DVec3 {
        *self
    }
}

/// Ergebnis der Sortierung.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedDatasets<T> {
    /// Mittlerer Abstand pro Schicht über den gesamten Bereich (0 bei < 2 Schichten)
    pub spacing: f64,
    /// Bildposition der ersten sortierten Schicht
    pub origin: DVec3,
    pub datasets: Vec<T>,
}

/// Sortiert Datensätze nach ihrem Abstand entlang `scan_axis`.
///
/// Der Abstand wird relativ zum ersten Eingabe-Datensatz gemessen, sortiert wird
/// aufsteigend. Der Schichtabstand ist der Mittelwert `(max − min) / (n − 1)`, damit
/// fehlende oder doppelte Schichten am Anfang keinen Abstand 0 erzeugen.
/// Gibt `None` für eine leere Eingabe zurück.
pub fn sort_datasets_by_image_position<T: ImagePositioned>(
    scan_axis: DVec3,
    datasets: Vec<T>,
    policy: DuplicatePositionPolicy,
) -> Option<SortedDatasets<T>> {
    let reference = datasets.first()?.image_position();

    let mut pairs: Vec<(f64, T)> = datasets
        .into_iter()
        .map(|dataset| ((dataset.image_position() - reference).dot(scan_axis), dataset))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    if policy == DuplicatePositionPolicy::Drop {
        let before = pairs.len();
        pairs.dedup_by(|current, previous| {
            (current.0 - previous.0).abs() < DUPLICATE_POSITION_EPSILON
        });
        if pairs.len() != before {
            log::debug!(
                "{} Schicht(en) mit doppelter Position verworfen",
                before - pairs.len()
            );
        }
    }

    let spacing = match (pairs.first(), pairs.last()) {
        (Some(first), Some(last)) if pairs.len() > 1 => {
            (last.0 - first.0) / (pairs.len() - 1) as f64
        }
        _ => 0.0,
    };
    let origin = pairs.first().map(|(_, d)| d.image_position())?;

    Some(SortedDatasets {
        spacing,
        origin,
        datasets: pairs.into_iter().map(|(_, dataset)| dataset).collect(),
    })
}

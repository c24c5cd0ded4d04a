//! Vertrag zum Overlay-Widget, das Fadenkreuz, Referenzlinien und Dreh-Griffe zeichnet.
//!
//! Das Widget selbst ist extern; die Interaktion fragt nur Geometrie ab, setzt
//! Auswahl-Flags und liefert neu berechnete Geometrie. `ReferenceLineOverlay` ist
//! die Standard-Implementierung ohne Zeichenlogik.

use glam::DVec2;

/// Dreh-Griffe einer Referenzlinie (je einer pro Linienhälfte).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotateHandles {
    /// Griff-Positionen in Display-Koordinaten
    pub points: [DVec2; 2],
    /// Hover-/Drag-Hervorhebung
    pub selected: bool,
}

/// Projektion der Schnittebene eines anderen Viewports in diesen Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReferenceLine {
    /// Endpunkte am Viewport-Rand (Display-Koordinaten)
    pub points: [DVec2; 2],
    /// Index des Viewports, dessen Ebene diese Linie darstellt
    pub source_viewport: Option<usize>,
    /// Linie lenkt Slice-Scroll auf das Fadenkreuz um
    pub active: bool,
    /// Hover-/Drag-Hervorhebung
    pub selected: bool,
    pub rotate_handles: RotateHandles,
}

impl ReferenceLine {
    /// `true`, wenn beide Endpunkte zusammenfallen.
    pub fn is_degenerate(&self) -> bool {
        self.points[0].distance(self.points[1]) < crate::core::geometry::MIN_LINE_LENGTH
    }
}

/// Neu abgeleitete Geometrie einer Referenzlinie, ohne Auswahl-Flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeometry {
    pub points: [DVec2; 2],
    pub rotate_handles: [DVec2; 2],
    pub source_viewport: Option<usize>,
}

impl LineGeometry {
    /// Linie der Länge 0 im Fadenkreuz-Zentrum (kein zweiter Viewport, parallele Ebenen).
    pub fn degenerate(center: DVec2, source_viewport: Option<usize>) -> Self {
        Self {
            points: [center, center],
            rotate_handles: [center, center],
            source_viewport,
        }
    }
}

/// Geometrische Abfrage-/Update-Schnittstelle des Fadenkreuz-Widgets.
pub trait CrosshairOverlay {
    /// Die beiden Referenzlinien (Index 0/1).
    fn reference_lines(&self) -> &[ReferenceLine; 2];

    /// Veränderbarer Zugriff für Auswahl-Flags.
    fn reference_lines_mut(&mut self) -> &mut [ReferenceLine; 2];

    /// Fadenkreuz-Zentrum in Display-Koordinaten.
    fn center(&self) -> DVec2;

    /// Übernimmt neu abgeleitete Geometrie; Auswahl-Flags bleiben erhalten.
    fn set_geometry(&mut self, center: DVec2, lines: [LineGeometry; 2]);

    /// Fordert ein Neuzeichnen an.
    fn request_redraw(&mut self) {}
}

/// Standard-Overlay: hält nur Zustand und zählt Redraw-Anforderungen.
#[derive(Debug, Clone, Default)]
pub struct ReferenceLineOverlay {
    center: DVec2,
    lines: [ReferenceLine; 2],
    redraw_requests: usize,
}

impl ReferenceLineOverlay {
    /// Erstellt ein leeres Overlay; die Geometrie folgt beim ersten Abgleich.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl bisher angeforderter Redraws.
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }
}

impl CrosshairOverlay for ReferenceLineOverlay {
    fn reference_lines(&self) -> &[ReferenceLine; 2] {
        &self.lines
    }

    fn reference_lines_mut(&mut self) -> &mut [ReferenceLine; 2] {
        &mut self.lines
    }

    fn center(&self) -> DVec2 {
        self.center
    }

    fn set_geometry(&mut self, center: DVec2, lines: [LineGeometry; 2]) {
        self.center = center;
        for (line, geometry) in self.lines.iter_mut().zip(lines) {
            line.points = geometry.points;
            line.rotate_handles.points = geometry.rotate_handles;
            line.source_viewport = geometry.source_viewport;
        }
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}

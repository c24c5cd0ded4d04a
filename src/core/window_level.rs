//! Umrechnung zwischen Fensterbreite/-zentrum und Mapping-Range (low/high).

use serde::{Deserialize, Serialize};

/// Helligkeit/Kontrast als Breite (Dynamikbereich) und Zentrum (Mittelpunkt).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowLevel {
    pub width: f64,
    pub center: f64,
}

impl WindowLevel {
    /// Kleinste zulässige Fensterbreite.
    pub const MIN_WIDTH: f64 = 0.01;

    /// Erstellt ein Fenster aus Breite und Zentrum.
    pub fn new(width: f64, center: f64) -> Self {
        Self { width, center }
    }

    /// Leitet das Fenster aus einer Mapping-Range ab.
    pub fn from_range(range: [f64; 2]) -> Self {
        let [low, high] = range;
        Self {
            width: (high - low).abs(),
            center: (low + high) / 2.0,
        }
    }

    /// Rechnet in eine Mapping-Range `[lower, upper]` zurück.
    pub fn to_range(self) -> [f64; 2] {
        let half = self.width / 2.0;
        [self.center - half, self.center + half]
    }

    /// Klemmt die Breite auf `MIN_WIDTH`.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(Self::MIN_WIDTH),
            center: self.center,
        }
    }
}

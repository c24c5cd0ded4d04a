//! Zentrale Konfiguration der MPR-Interaktion.
//!
//! `InteractionOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte sind feste Konstanten bzw. Fallback/Default.

use serde::{Deserialize, Serialize};

// ── Fadenkreuz ──────────────────────────────────────────────────────

/// Greif-Abstand zu Referenzlinien und Dreh-Griffen in Display-Pixeln.
pub const LINE_GRAB_DISTANCE_PX: f64 = 20.0;
/// Greif-Radius um das Fadenkreuz-Zentrum in Display-Pixeln.
pub const CENTER_RADIUS_PX: f64 = 20.0;

// ── Maus ────────────────────────────────────────────────────────────

/// Zeitfenster für Doppelklicks (gleiche Taste) in Millisekunden.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 400;

// ── Kamera-Anpassung ────────────────────────────────────────────────

/// Slice-Änderung pro Pixel, relativ zur Spannweite des Slice-Bereichs.
pub const SLICE_SCROLL_SPEED: f64 = 0.0005;
/// Normierung des Dynamikbereichs für Window/Level.
pub const WINDOW_LEVEL_NORMALIZATION: f64 = 1024.0;
/// Zoom-Faktor pro Viewport-Höhe.
pub const ZOOM_FACTOR: f64 = 1.5;
/// Standard-Skalierung für Window/Level.
pub const LEVEL_SCALE: f64 = 1.0;
/// Schrittweite für Mausrad-Scroll, falls kein Volumen vorhanden ist.
pub const WHEEL_SLICE_STEP_FALLBACK: f64 = 1.0;

/// Alle zur Laufzeit änderbaren Interaktions-Optionen.
/// Wird als `mpr_interaction.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionOptions {
    // ── Fadenkreuz ──────────────────────────────────────────────
    /// Greif-Abstand für Referenzlinien und Dreh-Griffe (Pixel)
    pub line_grab_distance: f64,
    /// Greif-Radius um das Zentrum (Pixel), für neu erstellte Overlays
    pub center_radius: f64,

    // ── Scroll ──────────────────────────────────────────────────
    /// Normalen Slice-Scroll unterdrücken, wenn keine Referenzlinie aktiv ist
    pub disable_normal_mpr_scroll: bool,
    /// Feste Mausrad-Schrittweite in Welteinheiten (`None` = kleinster Voxelabstand)
    pub wheel_slice_step: Option<f64>,

    // ── Zoom / Window-Level ─────────────────────────────────────
    /// Zoom-Richtung umkehren
    pub flip_zoom_direction: bool,
    /// Multiplikator für die Window/Level-Empfindlichkeit
    pub level_scale: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            line_grab_distance: LINE_GRAB_DISTANCE_PX,
            center_radius: CENTER_RADIUS_PX,

            disable_normal_mpr_scroll: false,
            wheel_slice_step: None,

            flip_zoom_direction: false,
            level_scale: LEVEL_SCALE,
        }
    }
}

impl InteractionOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.validated()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mpr_interaction"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mpr_interaction.toml")
    }

    /// Klemmt ungültige Werte (negativ, NaN) auf Standardwerte.
    pub fn validate(&mut self) {
        fn non_negative(value: f64, fallback: f64) -> f64 {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                fallback
            }
        }

        self.line_grab_distance = non_negative(self.line_grab_distance, LINE_GRAB_DISTANCE_PX);
        self.center_radius = non_negative(self.center_radius, CENTER_RADIUS_PX);
        self.level_scale = non_negative(self.level_scale, LEVEL_SCALE);
        self.wheel_slice_step = self
            .wheel_slice_step
            .filter(|step| step.is_finite() && *step > 0.0);
    }

    /// Gibt eine validierte Kopie zurück.
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }

    /// Vorzeichen der Zoom-Richtung (`-1` bei umgekehrter Richtung).
    pub fn zoom_direction(&self) -> f64 {
        if self.flip_zoom_direction {
            -1.0
        } else {
            1.0
        }
    }
}

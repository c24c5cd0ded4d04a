//! Doppelklick-Erkennung pro Taste.

use super::events::MouseButton;
use super::state::ClickMemory;
use crate::shared::DOUBLE_CLICK_WINDOW_MS;

/// Erkennt Doppelklicks: gleiche Taste zweimal innerhalb des Zeitfensters,
/// ohne dazwischenliegende Zeigerbewegung.
#[derive(Debug, Clone, Copy)]
pub struct ClickClassifier {
    window_ms: u64,
}

impl Default for ClickClassifier {
    fn default() -> Self {
        Self {
            window_ms: DOUBLE_CLICK_WINDOW_MS,
        }
    }
}

impl ClickClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Klassifiziert einen Tastendruck.
    ///
    /// Bei erkanntem Doppelklick wird das Gedächtnis geleert, sodass ein dritter
    /// Druck wieder als Einzelklick zählt. Sonst wird der Druck gemerkt.
    pub fn classify(&self, memory: &mut ClickMemory, button: MouseButton, now_ms: u64) -> bool {
        let is_double = match (memory.last_button, memory.last_timestamp_ms) {
            (Some(last), Some(at)) => {
                last == button && now_ms >= at && now_ms - at < self.window_ms
            }
            _ => false,
        };

        if is_double {
            memory.clear();
        } else {
            memory.last_button = Some(button);
            memory.last_timestamp_ms = Some(now_ms);
        }
        is_double
    }

    /// Jede Zeigerbewegung bricht eine laufende Doppelklick-Erkennung ab.
    pub fn on_pointer_move(memory: &mut ClickMemory) {
        memory.clear();
    }
}

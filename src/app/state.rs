//! Interaktionszustand pro Viewport: Tasten, Klick-Gedächtnis, aktive Operation.

use super::events::MouseButton;
use crate::core::WindowLevel;
use glam::DVec2;

/// Welche Maustasten aktuell gedrückt sind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl ButtonState {
    pub fn set(&mut self, button: MouseButton, down: bool) {
        match button {
            MouseButton::Left => self.left = down,
            MouseButton::Middle => self.middle = down,
            MouseButton::Right => self.right = down,
        }
    }

    pub fn is_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
        }
    }

    pub fn any_down(&self) -> bool {
        self.left || self.middle || self.right
    }

    /// Gibt alle Tasten frei.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Letzter Tastendruck für die Doppelklick-Erkennung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickMemory {
    pub last_button: Option<MouseButton>,
    pub last_timestamp_ms: Option<u64>,
}

impl ClickMemory {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.last_button.is_none() && self.last_timestamp_ms.is_none()
    }
}

/// Pan-Geste: vorherige Zeigerposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanState {
    pub previous_position: DVec2,
}

/// Zoom-Geste: vorherige Zeigerposition und Skalierung pro Pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub previous_position: DVec2,
    /// Vorzeichenbehafteter Faktor (Viewport-Höhe, Projektion, Zoom-Richtung)
    pub zoom_scale: f64,
}

/// Window/Level-Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLevelState {
    /// Referenzposition; wird nach jeder angewendeten Änderung nachgeführt
    pub start_position: DVec2,
    /// Mapping-Range beim Start der Geste
    pub initial_mapping_range: [f64; 2],
    /// Aktuell angewendetes Fenster
    pub window: WindowLevel,
    pub level_scale: f64,
}

/// Slice-Geste (Scroll per Drag).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceState {
    pub previous_position: DVec2,
}

/// Aktive Operation eines Viewports. Wird beim Tastendruck erzeugt und beim
/// Loslassen auf `None` zurückgesetzt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Operation {
    #[default]
    None,
    Pan(PanState),
    Zoom(ZoomState),
    WindowLevel(WindowLevelState),
    Slice(SliceState),
    /// Fadenkreuz-Zentrum verschieben
    MoveCrosshair,
    /// Ebenen der anderen Viewports um die Blickachse drehen
    RotateCrosshair { previous_position: DVec2 },
    /// Zentrum entlang der Referenzlinie `snap_to_line_index` verschieben
    MoveReferenceLine { snap_to_line_index: usize },
}

impl Operation {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Fadenkreuz-Operationen werden nicht durch Zoom verdrängt.
    pub fn is_crosshair_operation(&self) -> bool {
        matches!(
            self,
            Self::MoveCrosshair | Self::RotateCrosshair { .. } | Self::MoveReferenceLine { .. }
        )
    }

    /// `true`, wenn die Operation die Fadenkreuz-Position ändert (Rotation nicht).
    pub fn moves_crosshairs(&self) -> bool {
        matches!(self, Self::MoveCrosshair | Self::MoveReferenceLine { .. })
    }

    /// Kurzname für Log-Ausgaben.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Pan(_) => "Pan",
            Self::Zoom(_) => "Zoom",
            Self::WindowLevel(_) => "WindowLevel",
            Self::Slice(_) => "Slice",
            Self::MoveCrosshair => "MoveCrosshair",
            Self::RotateCrosshair { .. } => "RotateCrosshair",
            Self::MoveReferenceLine { .. } => "MoveReferenceLine",
        }
    }
}

/// Phase der Zustandsmaschine. Außerhalb eines Drags läuft das passive Hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    #[default]
    Idle,
    ButtonDown,
    Dragging,
}

/// Gesamter Interaktionszustand eines Viewports.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub buttons: ButtonState,
    pub click_memory: ClickMemory,
    pub operation: Operation,
    pub phase: InteractionPhase,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Eine Taste ist gedrückt; Hover-Hervorhebung ruht.
    pub fn is_dragging(&self) -> bool {
        self.phase != InteractionPhase::Idle
    }

    /// Setzt Tasten, Operation und Phase zurück. Das Klick-Gedächtnis bleibt,
    /// damit ein Doppelklick über das Loslassen hinweg erkannt wird.
    pub fn reset_gesture(&mut self) {
        self.buttons.clear();
        self.operation = Operation::None;
        self.phase = InteractionPhase::Idle;
    }
}

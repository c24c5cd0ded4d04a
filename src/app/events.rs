//! Pointer-Events (Eingang) und Interaktions-Effekte (Ausgang).

use crate::core::WindowLevel;
use glam::DVec2;

/// Maustaste mit stabiler ID (1 = links, 2 = Mitte, 3 = rechts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Numerische Tasten-ID, wie sie an Doppelklick-Callbacks übergeben wird.
    pub fn id(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Middle => 2,
            Self::Right => 3,
        }
    }
}

/// Zustand der Modifier-Tasten beim Event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Nur Shift gedrückt.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    /// `true`, wenn keine Modifier-Taste gedrückt ist.
    pub fn is_empty(self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Art des Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEventKind {
    /// Taste gedrückt
    Press(MouseButton),
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    Move,
    /// Taste losgelassen
    Release(MouseButton),
    /// Mausrad; positives `delta_y` scrollt zum höheren Slice
    Wheel { delta_y: f64 },
    /// Zeiger verloren (Fokusverlust), läuft wie ein Release
    Cancel,
}

/// Rohes Pointer-Event eines Viewports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Display-Position (Pixel, Ursprung unten links)
    pub position: DVec2,
    pub modifiers: Modifiers,
    /// Zeitstempel in Millisekunden (monoton)
    pub timestamp_ms: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: DVec2, timestamp_ms: u64) -> Self {
        Self {
            kind,
            position,
            modifiers: Modifiers::default(),
            timestamp_ms,
        }
    }

    pub fn press(button: MouseButton, position: DVec2, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Press(button), position, timestamp_ms)
    }

    pub fn moved(position: DVec2, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Move, position, timestamp_ms)
    }

    pub fn release(button: MouseButton, position: DVec2, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Release(button), position, timestamp_ms)
    }

    pub fn wheel(delta_y: f64, position: DVec2, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Wheel { delta_y }, position, timestamp_ms)
    }

    pub fn cancel(position: DVec2, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Cancel, position, timestamp_ms)
    }

    /// Setzt die Modifier-Tasten.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// `true` für Release und Cancel.
    pub fn is_release(&self) -> bool {
        matches!(
            self.kind,
            PointerEventKind::Release(_) | PointerEventKind::Cancel
        )
    }
}

/// Seiteneffekte eines verarbeiteten Events an Renderer, Overlay und Host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEffect {
    /// Viewport neu rendern
    RenderRequested { viewport: usize },
    /// Overlay (Fadenkreuz, Referenzlinien) neu zeichnen
    OverlayRedrawRequested { viewport: usize },
    /// Gemeinsames Fadenkreuz wurde verschoben
    CrosshairsMoved,
    /// Window/Level wurde geändert
    WindowLevelsChanged { window: WindowLevel },
    /// Doppelklick erkannt; die normale Operation wurde unterdrückt
    DoubleClick { button: MouseButton, viewport: usize },
    /// Slice eines Viewports wurde geändert
    SliceChanged { viewport: usize, slice: f64 },
}

/// Hängt einen Effekt an, sofern er nicht bereits enthalten ist.
pub(crate) fn push_unique(effects: &mut Vec<InteractionEffect>, effect: InteractionEffect) {
    if !effects.contains(&effect) {
        effects.push(effect);
    }
}

//! Auswahl der Operation beim Tastendruck.
//!
//! Die Regeln werden in fester Reihenfolge (`POLICY`) ausgewertet; die erste
//! zutreffende Regel entscheidet. Der Fadenkreuz-Treffertest läuft nur, wenn eine
//! Regel ihn benötigt.

use super::events::{Modifiers, MouseButton};
use super::state::{ButtonState, Operation};
use crate::core::{distance_from_line, CrosshairOverlay, ReferenceLine};
use crate::error::Result;
use crate::shared::InteractionOptions;
use glam::DVec2;

/// Treffer des Zeigers auf dem Fadenkreuz-Overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrosshairHit {
    /// Innerhalb des Zentrums-Radius
    Center,
    /// Dreh-Griff der Linie `line_index`
    RotateHandle { line_index: usize },
    /// Referenzlinie `line_index` (die nähere von beiden)
    Line { line_index: usize },
    Miss,
}

/// Greif-Toleranzen des Treffertests in Display-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTolerance {
    /// Abstand zu Referenzlinien und Dreh-Griffen
    pub grab_distance: f64,
    /// Radius um das Fadenkreuz-Zentrum
    pub center_radius: f64,
}

impl HitTolerance {
    pub fn from_options(options: &InteractionOptions) -> Self {
        Self {
            grab_distance: options.line_grab_distance,
            center_radius: options.center_radius,
        }
    }
}

impl Default for HitTolerance {
    fn default() -> Self {
        Self::from_options(&InteractionOptions::default())
    }
}

/// `true`, wenn `position` innerhalb des Zentrums-Radius liegt.
pub(crate) fn within_center(
    overlay: &dyn CrosshairOverlay,
    position: DVec2,
    tolerance: HitTolerance,
) -> bool {
    overlay.center().distance(position) < tolerance.center_radius
}

/// `true`, wenn einer der Dreh-Griffe einer nicht-degenerierten Linie gegriffen ist.
pub(crate) fn handle_grabbed(line: &ReferenceLine, position: DVec2, tolerance: HitTolerance) -> bool {
    !line.is_degenerate()
        && line
            .rotate_handles
            .points
            .iter()
            .any(|handle| handle.distance(position) < tolerance.grab_distance)
}

/// Index der näheren Linie, falls eine innerhalb des Greif-Abstands liegt.
pub(crate) fn nearest_line(
    lines: &[ReferenceLine; 2],
    position: DVec2,
    tolerance: HitTolerance,
) -> Option<usize> {
    let first = distance_from_line(lines[0].points, position);
    let second = distance_from_line(lines[1].points, position);
    (first <= tolerance.grab_distance || second <= tolerance.grab_distance)
        .then_some(if first < second { 0 } else { 1 })
}

/// Prüft Zentrum, dann Dreh-Griffe, dann Linien.
///
/// Degenerierte Linien haben unendlichen Abstand und werden nie getroffen.
pub fn hit_test(
    overlay: &dyn CrosshairOverlay,
    position: DVec2,
    tolerance: HitTolerance,
) -> CrosshairHit {
    if within_center(overlay, position, tolerance) {
        return CrosshairHit::Center;
    }

    let lines = overlay.reference_lines();
    if let Some(line_index) = lines
        .iter()
        .position(|line| handle_grabbed(line, position, tolerance))
    {
        return CrosshairHit::RotateHandle { line_index };
    }

    match nearest_line(lines, position, tolerance) {
        Some(line_index) => CrosshairHit::Line { line_index },
        None => CrosshairHit::Miss,
    }
}

/// Kamera-Anpassung, die eine Geste startet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjusterKind {
    Pan,
    Zoom,
    WindowLevel,
    Slice,
}

/// Ergebnis der Auswertung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Neue Kamera-Anpassung starten
    Adjust(AdjusterKind),
    /// Shift + Links: Fadenkreuz unabhängig vom Treffer verschieben
    ForcedMove,
    /// Treffer auf dem Overlay (nie `Miss`)
    Crosshair(CrosshairHit),
    /// Laufende Operation beibehalten
    Keep,
    /// Keine Operation
    Idle,
}

/// Benannte Regeln, in Prioritätsreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyRule {
    /// Links + Rechts gleichzeitig → Zoom (außer während einer Fadenkreuz-Operation)
    ZoomOnDualButton,
    /// Mittlere Taste → Window/Level
    WindowLevelOnMiddle,
    /// Rechts ohne Links → Pan
    PanOnRight,
    /// Links + Shift ohne laufende Operation → Fadenkreuz verschieben
    ShiftForcedMove,
    /// Links → Treffertest auf Zentrum, Dreh-Griff, Linie
    CrosshairHitTest,
    /// Links ohne laufende Operation → Slice per Drag
    SliceOnLeft,
}

pub const POLICY: [PolicyRule; 6] = [
    PolicyRule::ZoomOnDualButton,
    PolicyRule::WindowLevelOnMiddle,
    PolicyRule::PanOnRight,
    PolicyRule::ShiftForcedMove,
    PolicyRule::CrosshairHitTest,
    PolicyRule::SliceOnLeft,
];

/// Eingaben eines Tastendrucks. `buttons` enthält die gerade gedrückte Taste bereits.
#[derive(Debug, Clone, Copy)]
pub struct PressContext<'a> {
    pub button: MouseButton,
    pub buttons: ButtonState,
    pub modifiers: Modifiers,
    pub current: &'a Operation,
}

/// Entscheidung inklusive der auslösenden Regel und eines ggf. ausgeführten Treffertests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub rule: Option<PolicyRule>,
    pub resolution: Resolution,
    /// `Some`, wenn der Treffertest lief (auch bei `Miss`)
    pub hit: Option<CrosshairHit>,
}

/// Wertet `POLICY` aus.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationResolver;

impl OperationResolver {
    pub fn new() -> Self {
        Self
    }

    /// Wählt genau eine Operation. `hit_test` wird höchstens einmal aufgerufen; ein
    /// Fehler (fehlendes Overlay) wird an den Aufrufer weitergereicht.
    pub fn resolve<F>(&self, ctx: PressContext<'_>, mut hit_test: F) -> Result<Decision>
    where
        F: FnMut() -> Result<CrosshairHit>,
    {
        let mut hit = None;

        for rule in POLICY {
            let resolution = match rule {
                PolicyRule::CrosshairHitTest => {
                    if !Self::hit_test_applies(&ctx) {
                        continue;
                    }
                    let result = hit_test()?;
                    hit = Some(result);
                    match result {
                        CrosshairHit::Miss => None,
                        other => Some(Resolution::Crosshair(other)),
                    }
                }
                _ => Self::evaluate(rule, &ctx),
            };

            if let Some(resolution) = resolution {
                log::debug!("Operation per Regel {:?}: {:?}", rule, resolution);
                return Ok(Decision {
                    rule: Some(rule),
                    resolution,
                    hit,
                });
            }
        }

        let resolution = if ctx.current.is_none() {
            Resolution::Idle
        } else {
            Resolution::Keep
        };
        log::debug!("Keine Regel trifft zu: {:?}", resolution);
        Ok(Decision {
            rule: None,
            resolution,
            hit,
        })
    }

    fn hit_test_applies(ctx: &PressContext<'_>) -> bool {
        ctx.button == MouseButton::Left && !ctx.buttons.right
    }

    fn evaluate(rule: PolicyRule, ctx: &PressContext<'_>) -> Option<Resolution> {
        let plain = ctx.modifiers.is_empty();
        match rule {
            PolicyRule::ZoomOnDualButton => {
                let dual = match ctx.button {
                    MouseButton::Left => ctx.buttons.right,
                    MouseButton::Right => ctx.buttons.left,
                    MouseButton::Middle => false,
                };
                (dual && plain).then(|| {
                    if ctx.current.is_crosshair_operation() {
                        Resolution::Keep
                    } else {
                        Resolution::Adjust(AdjusterKind::Zoom)
                    }
                })
            }
            PolicyRule::WindowLevelOnMiddle => (ctx.button == MouseButton::Middle && plain)
                .then_some(Resolution::Adjust(AdjusterKind::WindowLevel)),
            PolicyRule::PanOnRight => (ctx.button == MouseButton::Right && !ctx.buttons.left && plain)
                .then_some(Resolution::Adjust(AdjusterKind::Pan)),
            PolicyRule::ShiftForcedMove => (ctx.button == MouseButton::Left
                && ctx.modifiers.shift
                && ctx.current.is_none()
                && !ctx.buttons.right)
                .then_some(Resolution::ForcedMove),
            PolicyRule::SliceOnLeft => (ctx.button == MouseButton::Left
                && !ctx.buttons.right
                && ctx.current.is_none()
                && !ctx.modifiers.ctrl
                && !ctx.modifiers.alt)
                .then_some(Resolution::Adjust(AdjusterKind::Slice)),
            PolicyRule::CrosshairHitTest => None,
        }
    }
}

//! Handler-Kette pro Viewport.
//!
//! Ein Zeiger-Event läuft der Reihe nach durch alle Handler. Ein Handler kann die
//! Kette mit `Flow::Stop` anhalten; Pflicht-Handler (Tastenverfolgung und
//! Loslass-Abschluss) laufen trotzdem.

use super::clicks::ClickClassifier;
use super::events::{InteractionEffect, PointerEvent, PointerEventKind};
use super::handlers::{
    CameraAdjuster, PanAdjuster, SliceAdjuster, ViewportContext, WindowLevelAdjuster,
    ZoomAdjuster,
};
use super::resolver::{
    hit_test, AdjusterKind, CrosshairHit, HitTolerance, OperationResolver, PressContext, Resolution,
};
use super::state::{InteractionPhase, InteractionState, Operation};
use super::use_cases::{crosshairs, hover, wheel};
use crate::core::MprViewport;
use crate::error::Result;
use crate::shared::InteractionOptions;
use glam::DVec2;

/// Steuerung des Kettenablaufs nach einem Handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Alles, was ein Handler für ein Event verändern darf.
pub struct EventContext<'a> {
    pub viewports: &'a mut [MprViewport],
    pub index: usize,
    pub options: &'a InteractionOptions,
    pub state: &'a mut InteractionState,
    pub effects: &'a mut Vec<InteractionEffect>,
}

impl<'a> EventContext<'a> {
    pub fn new(
        viewports: &'a mut [MprViewport],
        index: usize,
        options: &'a InteractionOptions,
        state: &'a mut InteractionState,
        effects: &'a mut Vec<InteractionEffect>,
    ) -> Self {
        Self {
            viewports,
            index,
            options,
            state,
            effects,
        }
    }

    /// Viewport-Zugriff für Use-Cases und Kamera-Anpassungen.
    pub fn viewport_context(&mut self) -> ViewportContext<'_> {
        ViewportContext::new(
            &mut *self.viewports,
            self.index,
            self.options,
            &mut *self.effects,
        )
    }

    /// Viewport-Zugriff und Interaktionszustand gleichzeitig.
    pub fn split(&mut self) -> (ViewportContext<'_>, &mut InteractionState) {
        (
            ViewportContext::new(
                &mut *self.viewports,
                self.index,
                self.options,
                &mut *self.effects,
            ),
            &mut *self.state,
        )
    }
}

/// Ein Glied der Handler-Kette.
pub trait InteractionHandler {
    /// Name für Log-Ausgaben.
    fn name(&self) -> &'static str;

    /// Pflicht-Handler laufen auch nach `Flow::Stop` oder einem Fehler.
    fn mandatory(&self) -> bool {
        false
    }

    fn handle(&mut self, event: &PointerEvent, ctx: &mut EventContext<'_>) -> Result<Flow>;
}

/// Geordnete Liste von Handlern, beim Erstellen zusammengesetzt.
pub struct HandlerChain {
    handlers: Vec<Box<dyn InteractionHandler>>,
}

impl HandlerChain {
    /// Standard-Kette; Host-Handler laufen direkt nach der Tastenverfolgung und
    /// damit vor dem Loslass-Abschluss.
    pub fn standard(host_handlers: Vec<Box<dyn InteractionHandler>>) -> Self {
        let mut handlers: Vec<Box<dyn InteractionHandler>> = vec![Box::new(ButtonTracking)];
        handlers.extend(host_handlers);
        handlers.push(Box::new(DoubleClickDetection::default()));
        handlers.push(Box::new(OperationDispatch::default()));
        handlers.push(Box::new(ReleaseFinalizer));
        Self { handlers }
    }

    /// Namen aller Handler in Ausführungsreihenfolge.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }

    /// Verarbeitet ein Event.
    ///
    /// Ein Fehler hält die Kette an und setzt die Operation auf `None`. Der erste
    /// Fehler wird zurückgegeben, nachdem die Pflicht-Handler gelaufen sind.
    pub fn dispatch(&mut self, event: &PointerEvent, ctx: &mut EventContext<'_>) -> Result<()> {
        let mut stopped = false;
        let mut first_error = None;

        for handler in self.handlers.iter_mut() {
            if stopped && !handler.mandatory() {
                continue;
            }

            match handler.handle(event, ctx) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => {
                    if !stopped {
                        log::trace!("Kette angehalten von {}", handler.name());
                    }
                    stopped = true;
                }
                Err(error) => {
                    log::warn!(
                        "Handler {} fehlgeschlagen, Operation {} abgebrochen: {}",
                        handler.name(),
                        ctx.state.operation.name(),
                        error
                    );
                    ctx.state.operation = Operation::None;
                    stopped = true;
                    first_error.get_or_insert(error);
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

// ── Standard-Handler ────────────────────────────────────────────────

/// Merkt sich gedrückte Tasten und die Phase.
#[derive(Debug, Default)]
pub struct ButtonTracking;

impl InteractionHandler for ButtonTracking {
    fn name(&self) -> &'static str {
        "ButtonTracking"
    }

    fn mandatory(&self) -> bool {
        true
    }

    fn handle(&mut self, event: &PointerEvent, ctx: &mut EventContext<'_>) -> Result<Flow> {
        let state = &mut *ctx.state;
        match event.kind {
            PointerEventKind::Press(button) => {
                state.buttons.set(button, true);
                state.phase = InteractionPhase::ButtonDown;
            }
            PointerEventKind::Move => {
                ClickClassifier::on_pointer_move(&mut state.click_memory);
                if state.phase == InteractionPhase::ButtonDown {
                    state.phase = InteractionPhase::Dragging;
                }
            }
            PointerEventKind::Release(_)
            | PointerEventKind::Wheel { .. }
            | PointerEventKind::Cancel => {}
        }
        Ok(Flow::Continue)
    }
}

/// Erkennt Doppelklicks ohne Modifier; ein Doppelklick ersetzt die Operation.
#[derive(Debug, Default)]
pub struct DoubleClickDetection {
    classifier: ClickClassifier,
}

impl InteractionHandler for DoubleClickDetection {
    fn name(&self) -> &'static str {
        "DoubleClickDetection"
    }

    fn handle(&mut self, event: &PointerEvent, ctx: &mut EventContext<'_>) -> Result<Flow> {
        let PointerEventKind::Press(button) = event.kind else {
            return Ok(Flow::Continue);
        };

        if !event.modifiers.is_empty() {
            ctx.state.click_memory.clear();
            return Ok(Flow::Continue);
        }

        let is_double =
            self.classifier
                .classify(&mut ctx.state.click_memory, button, event.timestamp_ms);
        if !is_double {
            return Ok(Flow::Continue);
        }

        log::debug!("Doppelklick {:?} in Viewport {}", button, ctx.index);
        let viewport = ctx.index;
        ctx.viewport_context().emit(InteractionEffect::DoubleClick { button, viewport });
        Ok(Flow::Stop)
    }
}

/// Wählt beim Tastendruck die Operation und führt sie bei Bewegung aus.
#[derive(Debug, Default)]
pub struct OperationDispatch {
    resolver: OperationResolver,
}

impl OperationDispatch {
    fn on_press(&self, event: &PointerEvent, ctx: &mut EventContext<'_>) -> Result<()> {
        let PointerEventKind::Press(button) = event.kind else {
            return Ok(());
        };
        let position = event.position;
        let (mut vctx, state) = ctx.split();

        let press = PressContext {
            button,
            buttons: state.buttons,
            modifiers: event.modifiers,
            current: &state.operation,
        };
        let decision = self.resolver.resolve(press, || {
            let overlay = vctx.active_overlay()?;
            Ok(hit_test(overlay, position, HitTolerance::from_options(vctx.options)))
        })?;

        if let Some(hit) = decision.hit {
            crosshairs::apply_hit_selection(&mut vctx, hit)?;
        }

        match decision.resolution {
            Resolution::Adjust(kind) => {
                state.operation = start_adjuster(kind, &mut vctx, position)?;
            }
            Resolution::ForcedMove | Resolution::Crosshair(CrosshairHit::Center) => {
                state.operation = Operation::MoveCrosshair;
                crosshairs::move_crosshairs(&mut vctx, position);
            }
            Resolution::Crosshair(CrosshairHit::RotateHandle { .. }) => {
                state.operation = Operation::RotateCrosshair {
                    previous_position: position,
                };
            }
            Resolution::Crosshair(CrosshairHit::Line { line_index }) => {
                let snap_to_line_index = 1 - line_index % 2;
                state.operation = Operation::MoveReferenceLine { snap_to_line_index };
                let snapped = crosshairs::snap_position_to_line(&vctx, position, snap_to_line_index)?;
                crosshairs::move_crosshairs(&mut vctx, snapped);
            }
            Resolution::Crosshair(CrosshairHit::Miss) | Resolution::Idle => {
                state.operation = Operation::None;
            }
            Resolution::Keep => {}
        }

        log::debug!(
            "Viewport {}: Operation {} gestartet",
            vctx.index,
            state.operation.name()
        );
        Ok(())
    }

    fn on_move(&self, position: DVec2, ctx: &mut EventContext<'_>) -> Result<()> {
        let (mut vctx, state) = ctx.split();

        match &mut state.operation {
            Operation::None => {
                if state.phase == InteractionPhase::Idle {
                    hover::update_hover(&mut vctx, position);
                }
            }
            Operation::Pan(gesture) => PanAdjuster.on_move(&mut vctx, gesture, position)?,
            Operation::Zoom(gesture) => ZoomAdjuster.on_move(&mut vctx, gesture, position)?,
            Operation::WindowLevel(gesture) => {
                WindowLevelAdjuster.on_move(&mut vctx, gesture, position)?
            }
            Operation::Slice(gesture) => SliceAdjuster.on_move(&mut vctx, gesture, position)?,
            Operation::MoveCrosshair => {
                crosshairs::move_crosshairs(&mut vctx, position);
            }
            Operation::MoveReferenceLine { snap_to_line_index } => {
                let snapped =
                    crosshairs::snap_position_to_line(&vctx, position, *snap_to_line_index)?;
                crosshairs::move_crosshairs(&mut vctx, snapped);
            }
            Operation::RotateCrosshair { previous_position } => {
                crosshairs::rotate_crosshairs(&mut vctx, *previous_position, position)?;
                *previous_position = position;
            }
        }
        Ok(())
    }
}

fn start_adjuster(
    kind: AdjusterKind,
    ctx: &mut ViewportContext<'_>,
    position: DVec2,
) -> Result<Operation> {
    Ok(match kind {
        AdjusterKind::Pan => Operation::Pan(PanAdjuster.on_start(ctx, position)?),
        AdjusterKind::Zoom => Operation::Zoom(ZoomAdjuster.on_start(ctx, position)?),
        AdjusterKind::WindowLevel => {
            Operation::WindowLevel(WindowLevelAdjuster.on_start(ctx, position)?)
        }
        AdjusterKind::Slice => Operation::Slice(SliceAdjuster.on_start(ctx, position)?),
    })
}

impl InteractionHandler for OperationDispatch {
    fn name(&self) -> &'static str {
        "OperationDispatch"
    }

    fn handle(&mut self, event: &PointerEvent, ctx: &mut EventContext<'_>) -> Result<Flow> {
        match event.kind {
            PointerEventKind::Press(_) => self.on_press(event, ctx)?,
            PointerEventKind::Move => self.on_move(event.position, ctx)?,
            PointerEventKind::Wheel { delta_y } => {
                wheel::scroll_wheel(&mut ctx.viewport_context(), delta_y)?
            }
            PointerEventKind::Release(_) | PointerEventKind::Cancel => {}
        }
        Ok(Flow::Continue)
    }
}

/// Schließt eine Geste beim Loslassen oder Abbrechen ab.
///
/// Räumt immer alle Tasten ab, auch ohne laufende Operation.
#[derive(Debug, Default)]
pub struct ReleaseFinalizer;

impl InteractionHandler for ReleaseFinalizer {
    fn name(&self) -> &'static str {
        "ReleaseFinalizer"
    }

    fn mandatory(&self) -> bool {
        true
    }

    fn handle(&mut self, event: &PointerEvent, ctx: &mut EventContext<'_>) -> Result<Flow> {
        if !event.is_release() {
            return Ok(Flow::Continue);
        }

        let operation = ctx.state.operation;
        if operation.is_crosshair_operation() {
            crosshairs::clear_selection(&mut ctx.viewport_context());
        }

        ctx.state.reset_gesture();
        if event.kind == PointerEventKind::Cancel {
            ctx.state.click_memory.clear();
        }

        if operation.moves_crosshairs() {
            ctx.viewport_context().emit(InteractionEffect::CrosshairsMoved);
        }
        if !operation.is_none() {
            log::debug!("Viewport {}: Operation {} beendet", ctx.index, operation.name());
        }
        Ok(Flow::Continue)
    }
}

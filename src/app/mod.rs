//! Interaktionsschicht: Events, Zustand, Operationsauswahl, Handler-Kette und Viewer.

pub mod callbacks;
pub mod chain;
pub mod clicks;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod resolver;
/// Zustandsmaschine pro Viewport
///
/// Tasten, Klick-Gedächtnis, aktive Operation und Phase.
pub mod state;
pub mod use_cases;

pub use callbacks::InteractionCallbacks;
pub use chain::{EventContext, Flow, HandlerChain, InteractionHandler};
pub use clicks::ClickClassifier;
pub use controller::{MprInteractor, MprViewer};
pub use events::{InteractionEffect, Modifiers, MouseButton, PointerEvent, PointerEventKind};
pub use handlers::{CameraAdjuster, ViewportContext};
pub use resolver::{
    hit_test, AdjusterKind, CrosshairHit, HitTolerance, OperationResolver, PolicyRule, PressContext,
    Resolution, POLICY,
};
pub use state::{ButtonState, ClickMemory, InteractionPhase, InteractionState, Operation};
pub use use_cases::crosshairs::ScrollDirection;

use super::{count, orthogonal_viewports, viewer};
use glam::DVec2;
use mpr_interaction::app::{EventContext, Flow};
use mpr_interaction::{
    InteractionEffect, InteractionError, InteractionHandler, InteractionOptions, Modifiers,
    MouseButton, MprViewer, PointerEvent, PointerEventKind, Result,
};

#[test]
fn test_missing_active_overlay_aborts_gesture() {
    let mut viewer = MprViewer::new(
        orthogonal_viewports([false, true, true]),
        InteractionOptions::default(),
    );

    let result = viewer.handle_pointer(
        0,
        PointerEvent::press(MouseButton::Left, DVec2::new(40.0, 40.0), 0),
    );
    assert_eq!(result, Err(InteractionError::MissingOverlay { viewport: 0 }));
    assert!(viewer.interaction_state(0).expect("Zustand").operation.is_none());

    viewer
        .handle_pointer(0, PointerEvent::release(MouseButton::Left, DVec2::new(40.0, 40.0), 10))
        .expect("Loslassen scheitert nie");
    assert!(!viewer.interaction_state(0).expect("Zustand").buttons.any_down());
}

#[test]
fn test_missing_overlay_elsewhere_is_skipped() {
    let mut viewer = MprViewer::new(
        orthogonal_viewports([true, false, true]),
        InteractionOptions::default(),
    );

    let press = PointerEvent::press(MouseButton::Left, DVec2::new(120.0, 130.0), 0)
        .with_modifiers(Modifiers::SHIFT);
    viewer.handle_pointer(0, press).expect("Press");

    // Pan ohne Overlay im aktiven Viewport funktioniert ebenfalls
    viewer
        .handle_pointer(1, PointerEvent::press(MouseButton::Right, DVec2::new(10.0, 10.0), 5))
        .expect("Pan-Start");
    viewer
        .handle_pointer(1, PointerEvent::moved(DVec2::new(20.0, 10.0), 6))
        .expect("Pan");
}

#[test]
fn test_cancel_runs_release_path() {
    let mut viewer = viewer();
    let press = PointerEvent::press(MouseButton::Left, DVec2::new(100.0, 100.0), 0)
        .with_modifiers(Modifiers::SHIFT);
    viewer.handle_pointer(0, press).expect("Press");

    let effects = viewer
        .handle_pointer(0, PointerEvent::cancel(DVec2::new(100.0, 100.0), 10))
        .expect("Abbruch");

    let state = viewer.interaction_state(0).expect("Zustand");
    assert!(state.operation.is_none());
    assert!(!state.buttons.any_down());
    assert!(state.click_memory.is_empty());
    assert_eq!(count(&effects, InteractionEffect::CrosshairsMoved), 1);
}

/// Host-Handler, der Loslass-Events für sich beansprucht.
struct SwallowRelease;

impl InteractionHandler for SwallowRelease {
    fn name(&self) -> &'static str {
        "SwallowRelease"
    }

    fn handle(&mut self, event: &PointerEvent, _ctx: &mut EventContext<'_>) -> Result<Flow> {
        if matches!(event.kind, PointerEventKind::Release(_)) {
            return Ok(Flow::Stop);
        }
        Ok(Flow::Continue)
    }
}

#[test]
fn test_host_stop_on_release_still_finalizes() {
    let mut viewer = viewer().with_host_handlers(|_| {
        vec![Box::new(SwallowRelease) as Box<dyn InteractionHandler>]
    });

    let press = PointerEvent::press(MouseButton::Left, DVec2::new(100.0, 100.0), 0)
        .with_modifiers(Modifiers::SHIFT);
    viewer.handle_pointer(0, press).expect("Press");
    viewer
        .handle_pointer(0, PointerEvent::moved(DVec2::new(110.0, 100.0), 5))
        .expect("Move");
    let effects = viewer
        .handle_pointer(0, PointerEvent::release(MouseButton::Left, DVec2::new(110.0, 100.0), 10))
        .expect("Release");

    let state = viewer.interaction_state(0).expect("Zustand");
    assert!(state.operation.is_none());
    assert!(!state.buttons.any_down());
    assert_eq!(count(&effects, InteractionEffect::CrosshairsMoved), 1);
}

#[test]
fn test_invalid_index_is_reported() {
    let mut viewer = viewer();
    assert_eq!(
        viewer.handle_pointer(3, PointerEvent::moved(DVec2::ZERO, 0)),
        Err(InteractionError::InvalidViewport { index: 3, count: 3 })
    );
}

use super::{count, viewer};
use glam::DVec2;
use mpr_interaction::{InteractionEffect, MouseButton, Operation, PointerEvent};

/// Weit weg von Zentrum, Linien und Griffen.
const EMPTY_SPOT: DVec2 = DVec2::new(10.0, 190.0);

#[test]
fn test_left_then_right_resolves_to_zoom() {
    let mut viewer = viewer();
    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Left, EMPTY_SPOT, 0))
        .expect("Links");
    assert!(matches!(
        viewer.interaction_state(0).expect("Zustand").operation,
        Operation::Slice(_)
    ));

    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Right, EMPTY_SPOT, 5))
        .expect("Rechts");
    assert!(matches!(
        viewer.interaction_state(0).expect("Zustand").operation,
        Operation::Zoom(_)
    ));
}

#[test]
fn test_release_clears_all_buttons() {
    let mut viewer = viewer();
    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Left, EMPTY_SPOT, 0))
        .expect("Links");
    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Right, EMPTY_SPOT, 5))
        .expect("Rechts");
    viewer
        .handle_pointer(0, PointerEvent::release(MouseButton::Right, EMPTY_SPOT, 10))
        .expect("Loslassen");

    let state = viewer.interaction_state(0).expect("Zustand");
    assert!(!state.buttons.any_down());
    assert!(state.operation.is_none());
    assert!(!state.is_dragging());
}

#[test]
fn test_stale_release_is_a_no_op() {
    let mut viewer = viewer();
    let effects = viewer
        .handle_pointer(1, PointerEvent::release(MouseButton::Middle, EMPTY_SPOT, 0))
        .expect("Loslassen");
    assert!(effects.is_empty());
    assert!(viewer.interaction_state(1).expect("Zustand").operation.is_none());
}

#[test]
fn test_double_click_within_window_suppresses_operation() {
    let mut viewer = viewer();
    let click = |viewer: &mut mpr_interaction::MprViewer, at: u64| {
        let effects = viewer
            .handle_pointer(0, PointerEvent::press(MouseButton::Left, EMPTY_SPOT, at))
            .expect("Press");
        let operation = viewer.interaction_state(0).expect("Zustand").operation;
        viewer
            .handle_pointer(0, PointerEvent::release(MouseButton::Left, EMPTY_SPOT, at + 20))
            .expect("Release");
        (effects, operation)
    };
    let double = InteractionEffect::DoubleClick {
        button: MouseButton::Left,
        viewport: 0,
    };

    let (effects, _) = click(&mut viewer, 0);
    assert_eq!(count(&effects, double), 0);

    let (effects, operation) = click(&mut viewer, 399);
    assert_eq!(count(&effects, double), 1);
    assert!(operation.is_none());

    // Dritter Druck nach erkanntem Doppelklick zählt wieder als Einzelklick
    let (effects, operation) = click(&mut viewer, 450);
    assert_eq!(count(&effects, double), 0);
    assert!(matches!(operation, Operation::Slice(_)));
}

#[test]
fn test_double_click_outside_window_is_single() {
    let mut viewer = viewer();
    for at in [0, 400] {
        let effects = viewer
            .handle_pointer(0, PointerEvent::press(MouseButton::Left, EMPTY_SPOT, at))
            .expect("Press");
        assert!(!effects
            .iter()
            .any(|effect| matches!(effect, InteractionEffect::DoubleClick { .. })));
        viewer
            .handle_pointer(0, PointerEvent::release(MouseButton::Left, EMPTY_SPOT, at + 10))
            .expect("Release");
    }
}

#[test]
fn test_move_between_presses_clears_click_memory() {
    let mut viewer = viewer();
    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Right, EMPTY_SPOT, 0))
        .expect("Press");
    viewer
        .handle_pointer(0, PointerEvent::release(MouseButton::Right, EMPTY_SPOT, 10))
        .expect("Release");
    viewer
        .handle_pointer(0, PointerEvent::moved(EMPTY_SPOT + DVec2::X, 20))
        .expect("Move");
    assert!(viewer
        .interaction_state(0)
        .expect("Zustand")
        .click_memory
        .is_empty());

    let effects = viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Right, EMPTY_SPOT, 100))
        .expect("Press");
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, InteractionEffect::DoubleClick { .. })));
    assert!(matches!(
        viewer.interaction_state(0).expect("Zustand").operation,
        Operation::Pan(_)
    ));
}

#[test]
fn test_double_click_reaches_host_callback() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut viewer = viewer().with_callbacks(
        mpr_interaction::InteractionCallbacks::new()
            .with_double_click(move |button, viewport| sink.borrow_mut().push((button, viewport))),
    );

    for at in [0, 100] {
        viewer
            .handle_pointer(2, PointerEvent::press(MouseButton::Middle, EMPTY_SPOT, at))
            .expect("Press");
        viewer
            .handle_pointer(2, PointerEvent::release(MouseButton::Middle, EMPTY_SPOT, at + 10))
            .expect("Release");
    }
    assert_eq!(*seen.borrow(), vec![(MouseButton::Middle, 2)]);
}

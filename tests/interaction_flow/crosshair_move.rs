use super::{count, viewer, viewer_with};
use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use mpr_interaction::{
    InteractionCallbacks, InteractionEffect, InteractionOptions, Modifiers, MouseButton,
    Operation, PointerEvent,
};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_shift_drag_moves_shared_crosshair_and_notifies_once() {
    let notified = Rc::new(Cell::new(0usize));
    let sink = notified.clone();
    let mut viewer = viewer().with_callbacks(
        InteractionCallbacks::new().with_crosshairs_moved(move |_| sink.set(sink.get() + 1)),
    );
    assert_eq!(viewer.crosshair_world(), DVec3::ZERO);

    let press = PointerEvent::press(MouseButton::Left, DVec2::new(100.0, 100.0), 0)
        .with_modifiers(Modifiers::SHIFT);
    viewer.handle_pointer(0, press).expect("Press");
    assert_eq!(
        viewer.interaction_state(0).expect("Zustand").operation,
        Operation::MoveCrosshair
    );

    viewer
        .handle_pointer(0, PointerEvent::moved(DVec2::new(120.0, 130.0), 10))
        .expect("Move");

    for viewport in viewer.viewports() {
        let world = viewport.crosshair_world();
        assert_relative_eq!(world.x, 10.0, epsilon = 1e-6);
        assert_relative_eq!(world.y, -15.0, epsilon = 1e-6);
        assert_relative_eq!(world.z, 0.0, epsilon = 1e-6);
    }

    let effects = viewer
        .handle_pointer(0, PointerEvent::release(MouseButton::Left, DVec2::new(120.0, 130.0), 20))
        .expect("Release");

    assert!(viewer.interaction_state(0).expect("Zustand").operation.is_none());
    assert_eq!(count(&effects, InteractionEffect::CrosshairsMoved), 1);
    assert_eq!(notified.get(), 1);
}

#[test]
fn test_crosshair_move_realigns_other_planes() {
    let mut viewer = viewer();
    let press = PointerEvent::press(MouseButton::Left, DVec2::new(120.0, 130.0), 0)
        .with_modifiers(Modifiers::SHIFT);
    let effects = viewer.handle_pointer(0, press).expect("Press");

    // Sagittal (x) und koronal (y) folgen, axial (z) bleibt
    assert_relative_eq!(viewer.viewports()[1].slice(), 10.0, epsilon = 1e-6);
    assert_relative_eq!(viewer.viewports()[2].slice(), -15.0, epsilon = 1e-6);
    assert!(effects.contains(&InteractionEffect::RenderRequested { viewport: 1 }));
    assert!(effects.contains(&InteractionEffect::RenderRequested { viewport: 2 }));
    assert!(!effects.contains(&InteractionEffect::RenderRequested { viewport: 0 }));

    // Das Overlay des axialen Viewports zeigt das neue Zentrum
    let center = viewer.viewports()[0].overlay().expect("Overlay").center();
    assert_relative_eq!(center.x, 120.0, epsilon = 1e-6);
    assert_relative_eq!(center.y, 130.0, epsilon = 1e-6);
}

#[test]
fn test_dragging_a_line_snaps_center_to_the_other_line() {
    let mut viewer = viewer();

    // Nahe der vertikalen Linie → Zentrum bleibt auf der horizontalen Linie
    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Left, DVec2::new(105.0, 10.0), 0))
        .expect("Press");
    assert_eq!(
        viewer.interaction_state(0).expect("Zustand").operation,
        Operation::MoveReferenceLine { snap_to_line_index: 1 }
    );
    viewer
        .handle_pointer(0, PointerEvent::moved(DVec2::new(110.0, 30.0), 10))
        .expect("Move");

    let world = viewer.crosshair_world();
    assert_relative_eq!(world.x, 5.0, epsilon = 1e-6);
    assert_relative_eq!(world.y, 0.0, epsilon = 1e-6);

    let lines = viewer.viewports()[0].overlay().expect("Overlay").reference_lines();
    assert!(lines[0].active && lines[0].selected);

    let effects = viewer
        .handle_pointer(0, PointerEvent::release(MouseButton::Left, DVec2::new(110.0, 30.0), 20))
        .expect("Release");
    assert_eq!(count(&effects, InteractionEffect::CrosshairsMoved), 1);

    // Nach dem Loslassen: Auswahl weg, aktiv bleibt
    let lines = viewer.viewports()[0].overlay().expect("Overlay").reference_lines();
    assert!(lines[0].active);
    assert!(!lines[0].selected);
}

#[test]
fn test_hover_highlights_without_rendering() {
    let mut viewer = viewer();
    let effects = viewer
        .handle_pointer(0, PointerEvent::moved(DVec2::new(10.0, 102.0), 0))
        .expect("Move");

    let lines = viewer.viewports()[0].overlay().expect("Overlay").reference_lines();
    assert!(!lines[0].selected);
    assert!(lines[1].selected);
    assert_eq!(
        effects,
        vec![InteractionEffect::OverlayRedrawRequested { viewport: 0 }]
    );
}

#[test]
fn test_configured_center_radius_decides_between_center_and_line() {
    let press = PointerEvent::press(MouseButton::Left, DVec2::new(100.0, 112.0), 0);

    let mut viewer = viewer();
    viewer.handle_pointer(0, press).expect("Press");
    assert_eq!(
        viewer.interaction_state(0).expect("Zustand").operation,
        Operation::MoveCrosshair
    );

    let mut viewer = viewer_with(InteractionOptions {
        center_radius: 5.0,
        ..Default::default()
    });
    viewer.handle_pointer(0, press).expect("Press");
    assert_eq!(
        viewer.interaction_state(0).expect("Zustand").operation,
        Operation::MoveReferenceLine { snap_to_line_index: 1 }
    );
    let lines = viewer.viewports()[0].overlay().expect("Overlay").reference_lines();
    assert!(lines[0].active && lines[0].selected);
}

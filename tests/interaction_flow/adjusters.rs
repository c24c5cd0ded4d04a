use super::{count, viewer, SIZE};
use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use mpr_interaction::{
    InteractionCallbacks, InteractionEffect, MouseButton, PointerEvent, WindowLevel,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_window_level_drag_updates_all_viewports_and_notifies() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut viewer = viewer().with_callbacks(
        InteractionCallbacks::new().with_window_levels_changed(move |window| {
            sink.borrow_mut().push(window)
        }),
    );

    viewer
        .handle_pointer(1, PointerEvent::press(MouseButton::Middle, DVec2::new(50.0, 50.0), 0))
        .expect("Press");

    // Keine Bewegung → keine Änderung
    let effects = viewer
        .handle_pointer(1, PointerEvent::moved(DVec2::new(50.0, 50.0), 5))
        .expect("Move");
    assert!(effects.is_empty());
    assert!(seen.borrow().is_empty());

    let effects = viewer
        .handle_pointer(1, PointerEvent::moved(DVec2::new(60.0, 50.0), 10))
        .expect("Move");
    for viewport in viewer.viewports() {
        assert_eq!(viewport.mapping_range(), [-5.0, 1029.0]);
    }
    for index in 0..3 {
        assert_eq!(
            count(&effects, InteractionEffect::RenderRequested { viewport: index }),
            1
        );
    }
    assert_eq!(*seen.borrow(), vec![WindowLevel::new(1034.0, 512.0)]);

    // Nach oben → Zentrum sinkt
    viewer
        .handle_pointer(1, PointerEvent::moved(DVec2::new(60.0, 70.0), 15))
        .expect("Move");
    assert_eq!(viewer.viewports()[0].window_level(), WindowLevel::new(1034.0, 492.0));
}

#[test]
fn test_right_drag_pans_active_viewport_only() {
    let mut viewer = viewer();
    let others = [
        viewer.viewports()[1].camera.clone(),
        viewer.viewports()[2].camera.clone(),
    ];

    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Right, DVec2::new(100.0, 100.0), 0))
        .expect("Press");
    viewer
        .handle_pointer(0, PointerEvent::moved(DVec2::new(90.0, 140.0), 10))
        .expect("Move");

    let display = viewer.viewports()[0].world_to_display(DVec3::ZERO);
    assert_relative_eq!(display.x, 90.0, epsilon = 1e-6);
    assert_relative_eq!(display.y, 140.0, epsilon = 1e-6);

    // Fadenkreuz bleibt in der Welt, das Overlay-Zentrum wandert mit dem Bild
    assert_eq!(viewer.crosshair_world(), DVec3::ZERO);
    let center = viewer.viewports()[0].overlay().expect("Overlay").center();
    assert_relative_eq!(center.x, 90.0, epsilon = 1e-6);
    assert_relative_eq!(center.y, 140.0, epsilon = 1e-6);

    assert_eq!(viewer.viewports()[1].camera, others[0]);
    assert_eq!(viewer.viewports()[2].camera, others[1]);
}

#[test]
fn test_dual_button_zoom_changes_parallel_scale() {
    let mut viewer = viewer();
    let spot = DVec2::new(10.0, 10.0);
    let before = viewer.viewports()[2].camera.parallel_scale;

    viewer
        .handle_pointer(2, PointerEvent::press(MouseButton::Left, spot, 0))
        .expect("Links");
    viewer
        .handle_pointer(2, PointerEvent::press(MouseButton::Right, spot, 1))
        .expect("Rechts");
    viewer
        .handle_pointer(2, PointerEvent::moved(spot - DVec2::new(0.0, SIZE.y / 10.0), 10))
        .expect("Move");

    // 20 Pixel nach unten: k = 20 · 1.5 / 200 = 0.15
    assert_relative_eq!(
        viewer.viewports()[2].camera.parallel_scale,
        before * 0.85,
        epsilon = 1e-9
    );
}

#[test]
fn test_left_drag_on_empty_area_scrolls_slice() {
    let mut viewer = viewer();
    let spot = DVec2::new(10.0, 10.0);

    viewer
        .handle_pointer(1, PointerEvent::press(MouseButton::Left, spot, 0))
        .expect("Press");
    let effects = viewer
        .handle_pointer(1, PointerEvent::moved(spot + DVec2::new(0.0, 40.0), 10))
        .expect("Move");

    assert_relative_eq!(viewer.viewports()[1].slice(), 2.0, epsilon = 1e-9);
    assert_relative_eq!(viewer.crosshair_world().x, 2.0, epsilon = 1e-9);
    assert_eq!(count(&effects, InteractionEffect::CrosshairsMoved), 1);
}

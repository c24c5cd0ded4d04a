use super::{count, viewer, viewer_with};
use approx::assert_relative_eq;
use glam::DVec2;
use mpr_interaction::{
    InteractionEffect, InteractionOptions, MouseButton, PointerEvent, VoxelSample,
};

#[test]
fn test_wheel_scrolls_slice_and_moves_crosshair() {
    let mut viewer = viewer();
    let effects = viewer
        .handle_pointer(2, PointerEvent::wheel(-3.0, DVec2::new(50.0, 50.0), 0))
        .expect("Mausrad");

    assert_relative_eq!(viewer.viewports()[2].slice(), -1.0, epsilon = 1e-9);
    assert_relative_eq!(viewer.crosshair_world().y, -1.0, epsilon = 1e-9);
    assert_eq!(count(&effects, InteractionEffect::CrosshairsMoved), 1);
    assert!(effects.contains(&InteractionEffect::SliceChanged {
        viewport: 2,
        slice: -1.0
    }));
}

#[test]
fn test_wheel_respects_disabled_normal_scroll() {
    let mut viewer = viewer_with(InteractionOptions {
        disable_normal_mpr_scroll: true,
        ..Default::default()
    });
    let effects = viewer
        .handle_pointer(0, PointerEvent::wheel(1.0, DVec2::new(50.0, 50.0), 0))
        .expect("Mausrad");

    assert_relative_eq!(viewer.viewports()[0].slice(), 0.0);
    assert!(effects.is_empty());
}

#[test]
fn test_wheel_moves_crosshair_along_line_when_a_line_is_active() {
    let mut viewer = viewer();

    // Vertikale Linie greifen → Linie 0 wird aktiv, Zentrum auf x = 2.5
    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Left, DVec2::new(105.0, 10.0), 0))
        .expect("Press");
    viewer
        .handle_pointer(0, PointerEvent::release(MouseButton::Left, DVec2::new(105.0, 10.0), 10))
        .expect("Release");
    assert_relative_eq!(viewer.crosshair_world().x, 2.5, epsilon = 1e-6);

    let effects = viewer
        .handle_pointer(0, PointerEvent::wheel(1.0, DVec2::new(105.0, 10.0), 500))
        .expect("Mausrad");

    // Axialer Slice bleibt, das Fadenkreuz wandert entlang der horizontalen Linie
    // (Mausrad nach oben = rückwärts = nach rechts)
    assert_relative_eq!(viewer.viewports()[0].slice(), 0.0, epsilon = 1e-6);
    let world = viewer.crosshair_world();
    assert!(world.x > 2.5 + 1e-3);
    assert_relative_eq!(world.y, 0.0, epsilon = 1e-6);
    assert_eq!(count(&effects, InteractionEffect::CrosshairsMoved), 1);
}

#[test]
fn test_crosshair_value_without_scalars_is_none() {
    let viewer = viewer();
    let value: Option<VoxelSample> = viewer.crosshair_value(0).expect("Abfrage");
    assert!(value.is_none());
}

#[test]
fn test_repeated_wheel_along_active_line_stops_at_viewport_edge() {
    let mut viewer = viewer();
    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Left, DVec2::new(105.0, 10.0), 0))
        .expect("Press");
    viewer
        .handle_pointer(0, PointerEvent::release(MouseButton::Left, DVec2::new(105.0, 10.0), 10))
        .expect("Release");

    for step in 0..200u64 {
        viewer
            .handle_pointer(0, PointerEvent::wheel(1.0, DVec2::new(105.0, 10.0), 500 + step))
            .expect("Mausrad");
    }

    let world = viewer.crosshair_world();
    assert_relative_eq!(world.x, 50.0, epsilon = 1e-6);
    assert_relative_eq!(world.y, 0.0, epsilon = 1e-6);
    let center = viewer.viewports()[0].overlay().expect("Overlay").center();
    assert_relative_eq!(center.x, 200.0, epsilon = 1e-6);
    assert_relative_eq!(viewer.viewports()[0].slice(), 0.0, epsilon = 1e-6);
}

use super::{count, viewer};
use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use mpr_interaction::{InteractionEffect, MouseButton, Operation, PointerEvent};

/// Oberer Dreh-Griff der vertikalen Linie im axialen Viewport.
const HANDLE: DVec2 = DVec2::new(100.0, 160.0);

#[test]
fn test_rotation_keeps_active_camera_and_crosshair() {
    let mut viewer = viewer();
    let axial = viewer.viewports()[0].camera.clone();

    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Left, HANDLE, 0))
        .expect("Press");
    assert!(matches!(
        viewer.interaction_state(0).expect("Zustand").operation,
        Operation::RotateCrosshair { .. }
    ));

    // +90° gegen den Uhrzeigersinn um das Zentrum (100, 100)
    viewer
        .handle_pointer(0, PointerEvent::moved(DVec2::new(40.0, 100.0), 10))
        .expect("Move");

    assert_eq!(viewer.viewports()[0].camera, axial);
    for viewport in viewer.viewports() {
        assert_eq!(viewport.crosshair_world(), DVec3::ZERO);
    }

    let sagittal = viewer.viewports()[1].slice_normal();
    assert_relative_eq!(sagittal.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(sagittal.y, -1.0, epsilon = 1e-9);
    assert_relative_eq!(sagittal.z, 0.0, epsilon = 1e-9);

    // Beide gedrehten Ebenen bleiben zueinander und zur axialen Ebene orthogonal
    let coronal = viewer.viewports()[2].slice_normal();
    let axial_normal = viewer.viewports()[0].slice_normal();
    assert_relative_eq!(coronal.dot(sagittal), 0.0, epsilon = 1e-9);
    assert_relative_eq!(coronal.dot(axial_normal), 0.0, epsilon = 1e-9);
    assert_relative_eq!(sagittal.dot(axial_normal), 0.0, epsilon = 1e-9);

    // Fokuspunkte liegen weiter auf dem Fadenkreuz
    for viewport in &viewer.viewports()[1..] {
        let offset = (DVec3::ZERO - viewport.camera.focal_point).dot(viewport.slice_normal());
        assert_relative_eq!(offset, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_rotation_release_does_not_report_crosshair_move() {
    let mut viewer = viewer();
    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Left, HANDLE, 0))
        .expect("Press");
    viewer
        .handle_pointer(0, PointerEvent::moved(DVec2::new(130.0, 150.0), 10))
        .expect("Move");
    let effects = viewer
        .handle_pointer(0, PointerEvent::release(MouseButton::Left, DVec2::new(130.0, 150.0), 20))
        .expect("Release");

    assert_eq!(count(&effects, InteractionEffect::CrosshairsMoved), 0);
    let lines = viewer.viewports()[0].overlay().expect("Overlay").reference_lines();
    assert!(!lines[0].rotate_handles.selected);
    assert!(lines[0].active);
}

#[test]
fn test_rotation_with_unchanged_position_is_a_no_op() {
    let mut viewer = viewer();
    let before: Vec<_> = viewer.viewports().iter().map(|v| v.camera.clone()).collect();

    viewer
        .handle_pointer(0, PointerEvent::press(MouseButton::Left, HANDLE, 0))
        .expect("Press");
    viewer
        .handle_pointer(0, PointerEvent::moved(HANDLE, 10))
        .expect("Move");

    for (viewport, camera) in viewer.viewports().iter().zip(before) {
        assert_eq!(viewport.camera, camera);
    }
}

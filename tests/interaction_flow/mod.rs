use mpr_interaction::{
    InteractionEffect, InteractionOptions, MprViewer, MprViewport, ReferenceLineOverlay,
    SliceAxis, VolumeGeometry,
};
use glam::{DVec2, DVec3};
use std::sync::Arc;

mod adjusters;
mod buttons_and_clicks;
mod crosshair_move;
mod errors_and_chain;
mod rotation;
mod wheel;

pub const SIZE: DVec2 = DVec2::new(200.0, 200.0);

/// Würfel 101³ mit Abstand 1, zentriert im Ursprung, Skalarbereich [0, 1024].
pub fn cube_volume() -> Arc<VolumeGeometry> {
    Arc::new(VolumeGeometry::new(
        DVec3::splat(-50.0),
        DVec3::ONE,
        [101, 101, 101],
        [0.0, 1024.0],
    ))
}

/// Axial, sagittal, koronal; `overlays[i] == false` lässt das Overlay weg.
pub fn orthogonal_viewports(overlays: [bool; 3]) -> Vec<MprViewport> {
    let volume = cube_volume();
    [SliceAxis::Axial, SliceAxis::Sagittal, SliceAxis::Coronal]
        .into_iter()
        .zip(overlays)
        .map(|(axis, with_overlay)| {
            let viewport = MprViewport::orthogonal(axis, volume.clone(), SIZE);
            if with_overlay {
                viewport.with_overlay(Box::new(ReferenceLineOverlay::new()))
            } else {
                viewport
            }
        })
        .collect()
}

/// Log-Ausgabe in Tests (`RUST_LOG=mpr_interaction=trace`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn viewer_with(options: InteractionOptions) -> MprViewer {
    init_logging();
    MprViewer::new(orthogonal_viewports([true; 3]), options)
}

pub fn viewer() -> MprViewer {
    viewer_with(InteractionOptions::default())
}

pub fn count(effects: &[InteractionEffect], wanted: InteractionEffect) -> usize {
    effects.iter().filter(|effect| **effect == wanted).count()
}

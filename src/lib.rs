//! MPR-Viewer-Interaktion.
//! Zeiger-Zustandsmaschine und Fadenkreuz-Geometrie für verknüpfte MPR-Viewports,
//! als Library exportiert für Host-Anwendungen und Tests.

pub mod app;
pub mod core;
pub mod error;
pub mod shared;

pub use app::{
    InteractionCallbacks, InteractionEffect, InteractionHandler, Modifiers, MouseButton,
    MprViewer, Operation, PointerEvent, PointerEventKind,
};
pub use core::{
    Camera3D, CrosshairOverlay, MprViewport, ReferenceLineOverlay, SliceAxis, VolumeGeometry,
    VoxelSample, WindowLevel,
};
pub use error::{InteractionError, Result};
pub use shared::InteractionOptions;

//! Core-Domänentypen: Geometrie, Kamera, Volumen, Viewport, Overlay-Vertrag.

pub mod camera;
pub mod dataset_sort;
pub mod geometry;
pub mod overlay;
pub mod reference_lines;
pub mod viewport;
pub mod volume;
pub mod window_level;

pub use camera::Camera3D;
pub use dataset_sort::{
    sort_datasets_by_image_position, DuplicatePositionPolicy, ImagePositioned, SortedDatasets,
};
pub use geometry::{
    distance_from_line, nearest_focal_point, rotation_angle, snap_to_line, MIN_LINE_LENGTH,
};
pub use overlay::{
    CrosshairOverlay, LineGeometry, ReferenceLine, ReferenceLineOverlay, RotateHandles,
};
pub use reference_lines::{derive_line, rotate_handle_points, ROTATE_HANDLE_FRACTION};
pub use viewport::{MprViewport, SliceAxis, MIN_SLAB_THICKNESS};
pub use volume::{VolumeGeometry, VoxelSample};
pub use window_level::WindowLevel;

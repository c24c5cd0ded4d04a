//! Geteilte Konfiguration für `core` und `app`.

pub mod options;

pub use options::InteractionOptions;
pub use options::{
    CENTER_RADIUS_PX, DOUBLE_CLICK_WINDOW_MS, LINE_GRAB_DISTANCE_PX, SLICE_SCROLL_SPEED,
    WINDOW_LEVEL_NORMALIZATION, ZOOM_FACTOR,
};

//! Use-Cases der Interaktion: Fadenkreuz, Hover und Mausrad.

pub mod crosshairs;
pub mod hover;
pub mod wheel;

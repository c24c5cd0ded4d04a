//! Fehlertyp der Interaktionsschicht.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    #[error("Viewport {viewport} hat kein Fadenkreuz-Overlay")]
    MissingOverlay { viewport: usize },

    #[error("Viewport-Index {index} ungültig (Anzahl: {count})")]
    InvalidViewport { index: usize, count: usize },

    #[error("Viewport {viewport} hat kein Volumen")]
    MissingVolume { viewport: usize },
}

pub type Result<T> = std::result::Result<T, InteractionError>;

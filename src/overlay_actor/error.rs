use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OverlayError {
    #[error("Overlay component unavailable: {0}")]
    ComponentUnavailable(String),
}

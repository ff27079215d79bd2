use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChartError {
    #[error("Canvas '{canvas}' for chart '{key}' not found")]
    MissingCanvas { key: String, canvas: String },

    #[error("Chart engine failed: {0}")]
    Engine(String),

    #[error("Chart component unavailable: {0}")]
    ComponentUnavailable(String),
}

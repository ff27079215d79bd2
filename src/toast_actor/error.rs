use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ToastError {
    #[error("Toast component unavailable: {0}")]
    ComponentUnavailable(String),
}

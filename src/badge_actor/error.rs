use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BadgeError {
    #[error("Badge component unavailable: {0}")]
    ComponentUnavailable(String),
}

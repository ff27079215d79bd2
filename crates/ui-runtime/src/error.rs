//! # Runtime Errors
//!
//! Errors raised by the plumbing between a client and its component, as opposed to
//! errors a component reports inside its own replies.

/// Errors that can occur while talking to a component.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    #[error("Component mailbox closed")]
    ComponentClosed,
    #[error("Component dropped the reply channel")]
    ReplyDropped,
}

//! # Replies
//!
//! Requests are component-specific enums (see [`Component::Request`]). Each variant that
//! expects an answer carries its own `respond_to` sender, typed to exactly the value that
//! variant produces, so callers never have to match on a catch-all reply enum.
//!
//! ```rust,ignore
//! #[derive(Debug)]
//! pub enum ToastRequest {
//!     Show { message: String, respond_to: Response<ToastId> },
//!     Dismiss { id: ToastId, respond_to: Response<bool> },
//! }
//! ```
//!
//! [`Component::Request`]: crate::Component::Request

use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel carried by a request.
pub type Response<T> = oneshot::Sender<T>;

//! # Badge Component
//!
//! The item counter on the cart link in the navigation bar.
//!
//! ## Structure
//!
//! - [`component`] - [`CartBadge`], the [`Component`](ui_runtime::Component) owning the count
//! - [`requests`] - [`BadgeRequest`] and the internal [`BadgeSignal`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! On mount the badge decorates the cart link (class `cart-badge`), reuses or creates the
//! `span.cart-badge-count` inside it and starts a first refresh. Without a cart link it
//! stays inert: every operation answers with the unchanged state.
//!
//! Counts never go below zero and the count node is shown exactly when the count is
//! positive.

pub mod component;
pub mod error;
pub mod requests;

pub use component::{BadgeContext, CartBadge};
pub use error::BadgeError;
pub use requests::{BadgeRequest, BadgeSignal};

use std::time::Duration;
use ui_runtime::{ComponentActor, ComponentClient};

/// Creates a new badge actor and its client.
pub fn new(
    pulse_length: Duration,
    buffer_size: usize,
) -> (ComponentActor<CartBadge>, ComponentClient<CartBadge>) {
    ComponentActor::new(CartBadge::new(pulse_length), buffer_size)
}

//! # Component Trait
//!
//! The `Component` trait is the contract every stateful UI piece (toast stack, cart badge,
//! overlay, chart registry) implements to be driven by the generic [`ComponentActor`].
//!
//! # Architecture Note
//! The actor loop is written *once*. A component only says what its requests and signals
//! are, and how its state reacts to each of them.
//!
//! We use "Associated Types" to keep every component's vocabulary separate: a badge request
//! can't be sent to the overlay, and a toast timer signal can't end up in the badge. The
//! compiler rules that out.
//!
//! # Provided Methods (Hooks)
//! - [`Component::on_mount`] runs once before the first request is handled.
//! - [`Component::on_unmount`] runs once after the last client is dropped.
//!
//! The default implementations do nothing.
//!
//! [`ComponentActor`]: crate::ComponentActor

use crate::mailbox::Mailbox;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any stateful UI component implements to be run by a `ComponentActor`.
///
/// # Requests vs. Signals
/// - A **request** comes from outside (a page script, another component). It usually carries
///   a [`Response`](crate::Response) sender so the caller can await a reply.
/// - A **signal** comes from the component itself: a timer it scheduled, or background work
///   it spawned, reporting back through the [`Mailbox`]. Signals may be stale by the time
///   they arrive; handling them must check that the state they refer to still exists.
///
/// # Async & Context
/// Hooks are `#[async_trait]`. The `Context` holds the collaborators (document, API client,
/// auth provider…) and is injected when the actor starts running, not at construction time.
#[async_trait]
pub trait Component: Send + 'static {
    /// Messages accepted from callers.
    type Request: Send + Debug;

    /// Continuations the component posts to itself (timers, completed fetches).
    type Signal: Send + Debug + 'static;

    /// The runtime context (collaborators) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Called once when the actor starts, before any request is processed.
    async fn on_mount(&mut self, _ctx: &Self::Context, _mailbox: &Mailbox<Self::Signal>) {}

    /// Handle one request from a caller.
    async fn handle_request(
        &mut self,
        request: Self::Request,
        ctx: &Self::Context,
        mailbox: &Mailbox<Self::Signal>,
    );

    /// Handle one signal posted by a timer or a spawned task.
    async fn handle_signal(
        &mut self,
        signal: Self::Signal,
        ctx: &Self::Context,
        mailbox: &Mailbox<Self::Signal>,
    );

    /// Called once after every client has been dropped.
    async fn on_unmount(&mut self, _ctx: &Self::Context) {}
}

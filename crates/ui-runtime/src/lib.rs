//! # UI Runtime
//!
//! This crate provides the building blocks for stateful, single-owner UI components:
//! a toast stack, a cart badge, an overlay panel, a chart registry. Each one owns its
//! state inside a single Tokio task and reacts to three kinds of input, all delivered
//! through the same sequential loop:
//!
//! 1. **Requests** from the rest of the page (`show`, `open`, `refresh`, …)
//! 2. **Timer expirations** it scheduled itself (auto-dismiss, pulse cleanup)
//! 3. **Completions** of background work it spawned (network fetches)
//!
//! ## Why one task per component?
//!
//! A browser page is single-threaded: UI callbacks, timers and network completions
//! interleave on one event loop, and the only hazards are *ordering* hazards. A response
//! can arrive after the panel it was meant for has been closed; a dismiss timer can fire
//! after the toast is already gone.
//!
//! Giving each component an exclusive loop reproduces exactly that model:
//!
//! - **No locks**: state is owned by the task; nothing else can touch it.
//! - **Explicit continuations**: a timer or a fetch never mutates state directly. It
//!   posts a *signal* back into the mailbox, and the component decides whether the
//!   signal is still relevant (generation tokens, id lookups).
//! - **Deterministic tests**: everything runs on Tokio time, so tests can pause the clock
//!   and advance it step by step.
//!
//! ## Architecture Overview
//!
//! 1. **Component Layer** ([`Component`]) - Your state and how it reacts to requests and signals
//! 2. **Runtime Layer** ([`ComponentActor`]) - The mailbox loop
//! 3. **Interface Layer** ([`ComponentClient`]) - Type-safe request/reply from callers
//! 4. **Continuations** ([`Mailbox`]) - Timers and spawned work that report back as signals
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use async_trait::async_trait;
//! use ui_runtime::{Component, ComponentActor, Mailbox, Response};
//!
//! #[derive(Default)]
//! struct Counter { value: u32 }
//!
//! #[derive(Debug)]
//! enum CounterRequest {
//!     Bump { respond_to: Response<u32> },
//!     BumpLater { delay: Duration },
//! }
//!
//! #[derive(Debug)]
//! enum CounterSignal { Bump }
//!
//! #[async_trait]
//! impl Component for Counter {
//!     type Request = CounterRequest;
//!     type Signal = CounterSignal;
//!     type Context = ();
//!
//!     async fn handle_request(&mut self, request: CounterRequest, _: &(), mailbox: &Mailbox<CounterSignal>) {
//!         match request {
//!             CounterRequest::Bump { respond_to } => {
//!                 self.value += 1;
//!                 let _ = respond_to.send(self.value);
//!             }
//!             CounterRequest::BumpLater { delay } => {
//!                 mailbox.schedule(delay, CounterSignal::Bump);
//!             }
//!         }
//!     }
//!
//!     async fn handle_signal(&mut self, signal: CounterSignal, _: &(), _: &Mailbox<CounterSignal>) {
//!         match signal {
//!             CounterSignal::Bump => self.value += 1,
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ComponentActor::new(Counter::default(), 8);
//!     tokio::spawn(actor.run(()));
//!
//!     let value = client.call(|respond_to| CounterRequest::Bump { respond_to }).await.unwrap();
//!     assert_eq!(value, 1);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a client whose requests land in a receiver you control,
//! for testing client wrappers without running a component.

pub mod actor;
pub mod client;
pub mod component;
pub mod error;
pub mod mailbox;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ComponentActor;
pub use client::ComponentClient;
pub use component::Component;
pub use error::RuntimeError;
pub use mailbox::{Mailbox, TaskHandle, TimerHandle};
pub use message::Response;

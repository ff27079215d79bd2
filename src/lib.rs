//! # Cart UI
//!
//! > **The storefront's client-side state, as a set of small actors.**
//!
//! This crate drives the interactive parts of a food-ordering storefront: the toast stack,
//! the cart badge in the navigation bar, the cart overlay, the add-to-cart flight effect and
//! the owner dashboard charts. Rendering goes through a [`Dom`](dom::Dom) trait, so the whole
//! thing runs headless against [`MemoryDom`](dom::MemoryDom) in tests and in the demo.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One component, one task
//! Every stateful piece of the page is a [`Component`](ui_runtime::Component) driven by a
//! generic [`ComponentActor`](ui_runtime::ComponentActor). The actor owns the state and
//! handles requests, timer expirations and finished network calls one at a time, so there is
//! no locking around component state and no callback racing another callback.
//!
//! ### Late results are expected
//! Network work runs in spawned tasks that report back through the component's
//! [`Mailbox`](ui_runtime::Mailbox), tagged with a generation. A response that arrives after
//! the user closed the overlay, or after a newer refresh started, is dropped.
//!
//! ### Seams, not globals
//! The document, storage, network, navigation and charting library are traits handed to
//! [`Storefront::start`](lifecycle::Storefront::start). Nothing reaches for ambient state, and
//! auth is read fresh on every call.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Orchestrator ([`lifecycle`])
//! - **Role**: Spawns the components, wires their collaborators and shuts them down.
//! - **Key items**: [`Storefront`](lifecycle::Storefront), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 2. The Interface ([`clients`])
//! - **Role**: Plain async methods over each component's request enum.
//! - **Key items**: [`ToastClient`](clients::ToastClient), [`BadgeClient`](clients::BadgeClient),
//!   [`OverlayClient`](clients::OverlayClient), [`ChartClient`](clients::ChartClient).
//!
//! ### 3. The Components ([`toast_actor`], [`badge_actor`], [`overlay_actor`], [`chart_actor`])
//! - **Role**: The state machines themselves, one module each.
//! - [`animator`] is the stateless exception: every flight is its own short-lived task.
//!
//! ### 4. The Edges ([`http`], [`api`], [`auth`], [`dom`])
//! - **Role**: Authenticated requests (401 signs the user out), typed endpoints, session
//!   storage and route guards, document access.
//!
//! ### 5. Supporting cast ([`model`], [`config`], [`util`], [`testing`])
//! - DTOs and view state, timings, formatting and validation helpers, and the in-memory
//!   doubles used by tests and the demo.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod animator;
pub mod api;
pub mod auth;
pub mod badge_actor;
pub mod chart_actor;
pub mod clients;
pub mod config;
pub mod dom;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod overlay_actor;
pub mod testing;
pub mod toast_actor;
pub mod util;

pub use config::UiConfig;
pub use lifecycle::{Page, Services, Storefront, StorefrontError};

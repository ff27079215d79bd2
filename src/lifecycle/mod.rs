//! # Lifecycle
//!
//! Starting, wiring and stopping the storefront components.
//!
//! - [`Storefront`] - the application context that owns every component
//! - [`setup_tracing`] - installs the log subscriber (`RUST_LOG` aware)

pub mod storefront;

pub use storefront::{Page, Services, Storefront, StorefrontError};
pub use ui_runtime::tracing::setup_tracing;

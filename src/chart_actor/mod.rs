//! # Chart Component
//!
//! Keeps one charting-engine instance per chart key on the owner dashboard.
//!
//! ## Structure
//!
//! - [`component`] - [`ChartRegistry`], the [`Component`](ui_runtime::Component) holding the instances
//! - [`engine`] - the [`ChartEngine`] seam in front of the charting library
//! - [`error`] - [`ChartError`]
//! - [`requests`] - [`ChartRequest`]
//! - [`counter`] - the counting-up animation of the stat cards
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Replacing a chart
//!
//! A canvas can host a single engine instance. Rendering a key that is already drawn destroys
//! the old instance *before* creating the new one:
//!
//! ```rust,ignore
//! charts.render("revenue", ChartConfig::revenue(&week)).await?;
//! charts.render("revenue", ChartConfig::revenue(&next_week)).await?; // destroy, then create
//! ```
//!
//! Canvases follow the `{key}Chart` naming of the dashboard page: `revenueChart`,
//! `orderStatusChart`, `popularItemsChart`.

pub mod component;
pub mod counter;
pub mod engine;
pub mod error;
pub mod requests;

pub use component::{canvas_for, ChartRegistry};
pub use counter::{animate_stat_counter, stat_counter_frames};
pub use engine::{ChartEngine, ChartHandle};
pub use error::ChartError;
pub use requests::ChartRequest;

use ui_runtime::{ComponentActor, ComponentClient};

pub const REVENUE: &str = "revenue";
pub const ORDER_STATUS: &str = "orderStatus";
pub const POPULAR_ITEMS: &str = "popularItems";

/// Creates a new chart actor and its client.
pub fn new(buffer_size: usize) -> (ComponentActor<ChartRegistry>, ComponentClient<ChartRegistry>) {
    ComponentActor::new(ChartRegistry::default(), buffer_size)
}

//! Data shared between components, the backend and the page.

pub mod badge;
pub mod cart;
pub mod chart;
pub mod dashboard;
pub mod overlay;
pub mod toast;

pub use badge::{BadgeState, RefreshOutcome};
pub use cart::{AddToCart, CartLine, CartSnapshot, MenuItem};
pub use chart::{ChartConfig, ChartData, ChartKind, Colors, Dataset, Series};
pub use dashboard::{DashboardData, DashboardStats, StatCard, TopItem};
pub use overlay::OverlayState;
pub use toast::{Severity, ToastEntry, ToastId};

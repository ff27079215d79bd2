//! Page-facing wrappers around the component clients.
//!
//! Each wrapper hides the request enum of its component behind plain async methods and maps
//! runtime failures into the component's own error type.

pub mod badge_client;
pub mod chart_client;
pub mod overlay_client;
pub mod toast_client;

pub use badge_client::BadgeClient;
pub use chart_client::ChartClient;
pub use overlay_client::OverlayClient;
pub use toast_client::ToastClient;

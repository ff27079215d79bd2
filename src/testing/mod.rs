//! # Test Doubles
//!
//! In-memory stand-ins for every collaborator the components talk to. They are part of the
//! public API (not `#[cfg(test)]`) so that integration tests and the demo binary can wire a
//! complete storefront without a browser or a backend.
//!
//! | Double | Replaces | Notes |
//! |--------|----------|-------|
//! | [`FakeTransport`] | the network under `HttpClient` | queued responses, records requests |
//! | [`RecordingNavigator`] | `location.href` | records every path |
//! | [`MockCartApi`] | the backend cart & statistics API | fluent expectations, held replies |
//! | [`RecordingChartEngine`] | the charting library | records create / update / destroy |
//!
//! [`MemoryDom`](crate::dom::MemoryDom) and [`MemoryStore`](crate::auth::MemoryStore) live
//! next to the traits they implement.

mod charts;
mod mock_api;
mod transport;

pub use charts::{ChartEvent, RecordingChartEngine};
pub use mock_api::{ExpectationBuilder, Gate, MockCartApi};
pub use transport::{FakeTransport, RecordingNavigator};

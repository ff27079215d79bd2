//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for every component.
//!
//! ## What Gets Traced
//!
//! - **Component lifecycle**: `Component mounted` / `Component unmounted`
//! - **Requests**: every request at `debug`, with its payload
//! - **Signals**: timers and completions at `trace`
//! - **Decisions**: stale responses discarded, anchors missing, fetches failing
//!
//! ## Usage
//!
//! ```bash
//! # State changes only
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Timers and completions as well
//! RUST_LOG=trace cargo run
//! ```
//!
//! ## Output Format
//!
//! The compact format hides module paths (`with_target(false)`); components identify
//! themselves with the `component` field instead:
//!
//! ```text
//! INFO Component mounted component="CartOverlay"
//! INFO Cart loaded lines=2
//! WARN Error fetching cart count reason="Request failed with status 500"
//! ```

/// Installs the global `tracing` subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use the component field instead
        .compact() // Compact format shows spans inline (e.g., "add_to_cart:refresh")
        .init();
}

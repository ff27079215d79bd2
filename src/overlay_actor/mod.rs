//! # Overlay Component
//!
//! The cart panel that slides over the page when the cart link is clicked.
//!
//! ## Structure
//!
//! - [`component`] - [`CartOverlay`], the [`Component`](ui_runtime::Component) and its markup
//! - [`requests`] - [`OverlayRequest`] and the internal [`OverlaySignal`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## States
//!
//! ```text
//! Closed ──open──► Opening ──shell mounted──► Loading ──ok──────► Loaded
//!                                                │
//!                                                └──failure──► Error
//! any open state ──close──► Closed
//! ```
//!
//! The shell is built on the first open and reused afterwards. Fetch failures are shown
//! inside the panel; the overlay never raises toasts.

pub mod component;
pub mod error;
pub mod requests;

pub use component::{CartOverlay, OverlayContext};
pub use error::OverlayError;
pub use requests::{OverlayRequest, OverlaySignal};

use ui_runtime::{ComponentActor, ComponentClient};

/// Creates a new overlay actor and its client.
pub fn new(
    currency: impl Into<String>,
    buffer_size: usize,
) -> (ComponentActor<CartOverlay>, ComponentClient<CartOverlay>) {
    ComponentActor::new(CartOverlay::new(currency), buffer_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::auth::{AuthState, MemoryStore, Role, StorageAuth};
    use crate::clients::OverlayClient;
    use crate::dom::{Dom, MemoryDom, NodeId};
    use crate::model::{CartLine, CartSnapshot, OverlayState};
    use crate::testing::MockCartApi;
    use std::sync::Arc;
    use std::time::Duration;

    fn signed_in() -> Arc<StorageAuth> {
        let auth = StorageAuth::new(Arc::new(MemoryStore::new()));
        auth.store(&AuthState::signed_in("t-1", "asha", Role::Customer));
        Arc::new(auth)
    }

    fn start(dom: &Arc<MemoryDom>, api: &MockCartApi, auth: Arc<StorageAuth>) -> OverlayClient {
        let (actor, client) = new("₹", 16);
        tokio::spawn(actor.run(OverlayContext {
            dom: dom.clone(),
            api: Arc::new(api.clone()),
            auth,
        }));
        OverlayClient::new(client)
    }

    fn only(dom: &MemoryDom, class: &str) -> NodeId {
        let nodes = dom.find_all_by_class(class);
        assert_eq!(nodes.len(), 1, "expected one .{class}");
        nodes[0]
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_shows_spinner_then_lines() {
        let dom = Arc::new(MemoryDom::new());
        let api = MockCartApi::new();
        let gate = api.expect_fetch().hold();
        let overlay = start(&dom, &api, signed_in());

        assert_eq!(overlay.open().await.unwrap(), OverlayState::Loading);
        let root = only(&dom, component::OVERLAY_CLASS);
        assert!(dom.has_class(root, component::ACTIVE_CLASS));
        assert_eq!(dom.style(dom.body(), "overflow").as_deref(), Some("hidden"));
        only(&dom, "spinner");

        gate.release_ok(CartSnapshot::with_items(
            vec![CartLine::new("Burger", 120.0, 2)],
            Some(240.0),
        ));
        settle().await;

        assert_eq!(overlay.state().await.unwrap(), OverlayState::Loaded);
        assert!(dom.find_all_by_class("spinner").is_empty());
        let item = only(&dom, "cart-overlay-item");
        assert_eq!(
            dom.text_content(dom.query_class(item, "cart-overlay-item-info").unwrap()),
            "Burger₹120 × 2"
        );
        assert_eq!(dom.text_content(only(&dom, "cart-overlay-item-total")), "₹240.00");
        assert_eq!(dom.text_content(only(&dom, "cart-overlay-total-amount")), "₹240");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_cart_view() {
        let dom = Arc::new(MemoryDom::new());
        let api = MockCartApi::new();
        let absent: CartSnapshot = serde_json::from_str(r#"{"items": null}"#).unwrap();
        api.expect_fetch().return_ok(absent);
        let overlay = start(&dom, &api, signed_in());

        overlay.open().await.unwrap();
        settle().await;

        assert_eq!(overlay.state().await.unwrap(), OverlayState::Loaded);
        let empty = only(&dom, "empty-state-description");
        assert_eq!(dom.text_content(empty), component::EMPTY_MESSAGE);
        assert!(dom.find_all_by_class("cart-overlay-item").is_empty());
        assert_eq!(dom.text_content(only(&dom, "cart-overlay-total-amount")), "₹0.00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_total_falls_back_to_line_sum() {
        let dom = Arc::new(MemoryDom::new());
        let api = MockCartApi::new();
        api.expect_fetch().return_ok(CartSnapshot::with_items(
            vec![CartLine::new("Idli", 40.5, 2), CartLine::new("Chai", 15.0, 1)],
            None,
        ));
        let overlay = start(&dom, &api, signed_in());

        overlay.open().await.unwrap();
        settle().await;

        assert_eq!(dom.find_all_by_class("cart-overlay-item").len(), 2);
        assert_eq!(dom.text_content(only(&dom, "cart-overlay-total-amount")), "₹96.00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_open_does_not_refetch() {
        let dom = Arc::new(MemoryDom::new());
        let api = MockCartApi::new();
        let _gate = api.expect_fetch().hold();
        let overlay = start(&dom, &api, signed_in());

        overlay.open().await.unwrap();
        overlay.open().await.unwrap();
        settle().await;

        assert_eq!(api.fetch_calls(), 1);
        assert_eq!(dom.find_all_by_class(component::OVERLAY_CLASS).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_discards_pending_response() {
        let dom = Arc::new(MemoryDom::new());
        let api = MockCartApi::new();
        let gate = api.expect_fetch().hold();
        let overlay = start(&dom, &api, signed_in());

        overlay.open().await.unwrap();
        assert_eq!(overlay.close().await.unwrap(), OverlayState::Closed);
        assert_eq!(dom.style(dom.body(), "overflow"), None);

        gate.release_ok(CartSnapshot::with_items(vec![CartLine::new("Burger", 120.0, 1)], None));
        settle().await;

        assert_eq!(overlay.state().await.unwrap(), OverlayState::Closed);
        assert!(dom.find_all_by_class("cart-overlay-item").is_empty());
        let root = only(&dom, component::OVERLAY_CLASS);
        assert!(!dom.has_class(root, component::ACTIVE_CLASS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_shown_inline() {
        let dom = Arc::new(MemoryDom::new());
        let api = MockCartApi::new();
        api.expect_fetch().return_err(ApiError::rejected(500, "boom"));
        let overlay = start(&dom, &api, signed_in());

        overlay.open().await.unwrap();
        settle().await;

        assert_eq!(overlay.state().await.unwrap(), OverlayState::Error);
        assert_eq!(dom.text_content(only(&dom, "text-gray-600")), component::LOAD_ERROR);
        assert!(dom.find_all_by_class("toast").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_guest_gets_sign_in_message_without_fetch() {
        let dom = Arc::new(MemoryDom::new());
        let api = MockCartApi::new();
        let guest = Arc::new(StorageAuth::new(Arc::new(MemoryStore::new())));
        let overlay = start(&dom, &api, guest);

        assert_eq!(overlay.open().await.unwrap(), OverlayState::Error);
        settle().await;

        assert_eq!(api.fetch_calls(), 0);
        assert_eq!(dom.text_content(only(&dom, "text-gray-600")), component::SIGN_IN_MESSAGE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_and_subscribe() {
        let dom = Arc::new(MemoryDom::new());
        let api = MockCartApi::new();
        api.expect_fetch().return_ok(CartSnapshot::default());
        let overlay = start(&dom, &api, signed_in());
        let mut states = overlay.subscribe().await.unwrap();
        assert_eq!(*states.borrow_and_update(), OverlayState::Closed);

        overlay.toggle().await.unwrap();
        states
            .wait_for(|s| *s == OverlayState::Loaded)
            .await
            .unwrap();

        assert_eq!(overlay.toggle().await.unwrap(), OverlayState::Closed);
        assert_eq!(*states.borrow(), OverlayState::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forced_open_and_reload_fetch_again() {
        let dom = Arc::new(MemoryDom::new());
        let api = MockCartApi::new().with_fallback_cart(CartSnapshot::default());
        let overlay = start(&dom, &api, signed_in());

        assert_eq!(overlay.reload().await.unwrap(), OverlayState::Closed);
        assert_eq!(api.fetch_calls(), 0);

        overlay.open().await.unwrap();
        settle().await;
        overlay.open_forced().await.unwrap();
        settle().await;
        overlay.reload().await.unwrap();
        settle().await;

        assert_eq!(api.fetch_calls(), 3);
        assert_eq!(overlay.state().await.unwrap(), OverlayState::Loaded);
        assert_eq!(dom.find_all_by_class(component::OVERLAY_CLASS).len(), 1);
    }
}

//! # Cart UI demo
//!
//! Runs a storefront page headless: an in-memory document, a signed-in customer, the real
//! HTTP transport pointed at `CART_UI_BASE_URL` (default `http://localhost:8080`), and a
//! recording chart engine. Works without a backend; failures are logged and shown the way a
//! visitor would see them.

use cart_ui::auth::{AuthState, MemoryStore, Role, StorageAuth};
use cart_ui::dom::{Anchors, Dom, MemoryDom, Rect};
use cart_ui::http::ReqwestTransport;
use cart_ui::lifecycle::setup_tracing;
use cart_ui::model::{MenuItem, OverlayState};
use cart_ui::testing::{RecordingChartEngine, RecordingNavigator};
use cart_ui::{Page, Services, Storefront, StorefrontError, UiConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
    setup_tracing();

    let config = match std::env::var("CART_UI_BASE_URL") {
        Ok(url) => UiConfig::new(url),
        Err(_) => UiConfig::default(),
    };
    info!(base_url = %config.base_url, "Starting storefront demo");

    // The page: a nav bar with the cart link, and one menu card.
    let dom = Arc::new(MemoryDom::new());
    let cart_link = dom.append_text_element(dom.body(), "a", &["nav-link"], "Cart");
    dom.set_attribute(cart_link, "href", "/cart");
    dom.set_rect(cart_link, Rect::new(1180.0, 16.0, 48.0, 32.0));
    let add_button = dom.append_text_element(dom.body(), "button", &["btn", "btn-primary"], "Add");
    dom.set_rect(add_button, Rect::new(240.0, 520.0, 96.0, 40.0));

    let auth = StorageAuth::new(Arc::new(MemoryStore::new()));
    auth.store(&AuthState::signed_in("demo-token", "asha", Role::Customer));
    let navigator = RecordingNavigator::new();

    let services = Services::over_http(
        &config,
        Arc::new(ReqwestTransport::new()),
        Arc::new(auth),
        Arc::new(navigator.clone()),
        Arc::new(RecordingChartEngine::dashboard()),
    );
    let page = Page {
        dom: dom.clone(),
        anchors: Anchors::default().with_cart_link(cart_link),
    };
    let store = Storefront::start(config, page, services);

    store.toasts.info("Welcome back, asha").await?;

    let dosa = MenuItem::new(7, "Masala Dosa", 90.0);
    let span = tracing::info_span!("add_to_cart", item = %dosa.name);
    if let Err(e) = store.add_to_cart(add_button, &dosa, 2).instrument(span).await {
        warn!(error = %e, "Add to cart failed");
    }

    let mut overlay = store.overlay.subscribe().await?;
    store.overlay.open().await?;
    let settled = tokio::time::timeout(
        Duration::from_secs(5),
        async {
            overlay
                .wait_for(|s| matches!(s, OverlayState::Loaded | OverlayState::Error))
                .await
                .map(|state| *state)
        },
    )
    .await;
    match settled {
        Ok(Ok(state)) => info!(%state, "Overlay settled"),
        _ => warn!("Overlay did not settle in time"),
    }

    match store.load_dashboard().await {
        Ok(drawn) => info!(drawn, "Dashboard ready"),
        Err(e) => warn!(error = %e, "Dashboard unavailable"),
    }

    info!(badge = ?store.badge.state().await?, "Badge");
    for path in navigator.visits() {
        info!(%path, "Navigated");
    }
    println!("{}", dom.to_html(dom.body()));

    store.overlay.close().await?;
    store.shutdown().await
}

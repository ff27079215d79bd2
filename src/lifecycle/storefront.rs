use crate::animator::CartAnimator;
use crate::api::{ApiError, CartApi, DashboardApi, HttpApi};
use crate::auth::{AuthProvider, Navigator};
use crate::badge_actor::{BadgeContext, BadgeError};
use crate::chart_actor::{ChartEngine, ChartError};
use crate::clients::{BadgeClient, ChartClient, OverlayClient, ToastClient};
use crate::config::UiConfig;
use crate::dom::{Anchors, Dom, NodeId};
use crate::http::{HttpClient, Transport};
use crate::model::{AddToCart, DashboardData, MenuItem};
use crate::overlay_actor::{OverlayContext, OverlayError};
use crate::toast_actor::{ToastContext, ToastError};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Toast(#[from] ToastError),

    #[error(transparent)]
    Badge(#[from] BadgeError),

    #[error(transparent)]
    Overlay(#[from] OverlayError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Component task failed: {0}")]
    Shutdown(String),
}

/// The document the storefront renders into, with the anchors the host registered.
#[derive(Clone)]
pub struct Page {
    pub dom: Arc<dyn Dom>,
    pub anchors: Anchors,
}

/// Everything outside the document the components talk to.
#[derive(Clone)]
pub struct Services {
    pub cart: Arc<dyn CartApi>,
    pub dashboard: Arc<dyn DashboardApi>,
    pub auth: Arc<dyn AuthProvider>,
    pub navigator: Arc<dyn Navigator>,
    pub charts: Arc<dyn ChartEngine>,
}

impl Services {
    /// Backend access over `transport`, authenticated from `auth`.
    pub fn over_http(
        config: &UiConfig,
        transport: Arc<dyn Transport>,
        auth: Arc<dyn AuthProvider>,
        navigator: Arc<dyn Navigator>,
        charts: Arc<dyn ChartEngine>,
    ) -> Self {
        let http = HttpClient::new(&config.base_url, transport, auth.clone(), navigator.clone());
        let api = Arc::new(HttpApi::new(http));
        Self {
            cart: api.clone(),
            dashboard: api,
            auth,
            navigator,
            charts,
        }
    }
}

/// The application context: owns every component of a page and wires them together.
///
/// # Example
///
/// ```ignore
/// let store = Storefront::start(UiConfig::default(), page, services);
///
/// store.add_to_cart(button, &MenuItem::new(7, "Masala Dosa", 90.0), 1).await?;
/// store.overlay.open().await?;
///
/// store.shutdown().await?;
/// ```
pub struct Storefront {
    pub toasts: ToastClient,
    pub badge: BadgeClient,
    pub overlay: OverlayClient,
    pub charts: ChartClient,
    animator: CartAnimator,
    services: Services,
    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Spawns every component with its context. Must be called inside a tokio runtime.
    pub fn start(config: UiConfig, page: Page, services: Services) -> Self {
        let capacity = config.mailbox_capacity;

        let (toast_actor, toast_client) = crate::toast_actor::new(config.toast, capacity);
        let (badge_actor, badge_client) = crate::badge_actor::new(config.badge_pulse, capacity);
        let (overlay_actor, overlay_client) =
            crate::overlay_actor::new(config.currency_symbol.clone(), capacity);
        let (chart_actor, chart_client) = crate::chart_actor::new(capacity);

        let handles = vec![
            tokio::spawn(toast_actor.run(ToastContext {
                dom: page.dom.clone(),
                container: page.anchors.toast_container,
            })),
            tokio::spawn(badge_actor.run(BadgeContext {
                dom: page.dom.clone(),
                anchor: page.anchors.cart_link,
                api: services.cart.clone(),
                auth: services.auth.clone(),
            })),
            tokio::spawn(overlay_actor.run(OverlayContext {
                dom: page.dom.clone(),
                api: services.cart.clone(),
                auth: services.auth.clone(),
            })),
            tokio::spawn(chart_actor.run(services.charts.clone())),
        ];

        info!(base_url = %config.base_url, "Storefront started");
        Self {
            toasts: ToastClient::new(toast_client),
            badge: BadgeClient::new(badge_client),
            overlay: OverlayClient::new(overlay_client),
            charts: ChartClient::new(chart_client),
            animator: CartAnimator::new(page.dom, page.anchors.cart_link, config.flight),
            services,
            handles,
        }
    }

    pub fn animator(&self) -> &CartAnimator {
        &self.animator
    }

    /// The add-to-cart button flow: flight animation, optimistic badge bump, then the
    /// request. A rejection is shown as an error toast and the badge is re-synced.
    #[instrument(skip(self, item), fields(item = %item.name))]
    pub async fn add_to_cart(
        &self,
        source: NodeId,
        item: &MenuItem,
        quantity: u32,
    ) -> Result<(), StorefrontError> {
        self.animator.animate(source, &item.name, quantity);
        self.badge.increment(quantity).await?;

        let request = AddToCart {
            menu_item_id: item.id,
            quantity,
        };
        match self.services.cart.add_item(request).await {
            Ok(_) => {
                self.toasts.success(format!("{} added to cart", item.name)).await?;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Add to cart rejected");
                self.toasts.error(e.to_string()).await?;
                self.badge.refresh().await?;
                Err(e.into())
            }
        }
    }

    /// Removes a cart line. The badge drops first; an open overlay is reloaded on success.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(
        &self,
        cart_item_id: u64,
        quantity: u32,
    ) -> Result<(), StorefrontError> {
        self.badge.decrement(quantity).await?;

        match self.services.cart.remove_item(cart_item_id).await {
            Ok(_) => {
                self.overlay.reload().await?;
                self.toasts.info("Item removed from cart").await?;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Remove from cart rejected");
                self.toasts.error(e.to_string()).await?;
                self.badge.refresh().await?;
                Err(e.into())
            }
        }
    }

    /// Loads the owner statistics and draws the dashboard charts. Returns how many were drawn.
    #[instrument(skip(self))]
    pub async fn load_dashboard(&self) -> Result<usize, StorefrontError> {
        let stats = self.services.dashboard.fetch_statistics().await?;
        let drawn = self.charts.init(&DashboardData::from_stats(&stats)).await?;
        info!(drawn, "Dashboard charts drawn");
        Ok(drawn)
    }

    /// Releases the chart instances, then stops every component and waits for it to exit.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");

        if let Err(e) = self.charts.destroy_all().await {
            warn!(error = %e, "Charts could not be released");
        }

        // Dropping the clients closes the request channels; each component then unmounts.
        drop(self.toasts);
        drop(self.badge);
        drop(self.overlay);
        drop(self.charts);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Component task failed: {:?}", e);
                return Err(StorefrontError::Shutdown(e.to_string()));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

//! # Backend API
//!
//! Typed access to the endpoints the storefront components use. Components depend on the
//! [`CartApi`] / [`DashboardApi`] traits so tests can substitute
//! [`MockCartApi`](crate::testing::MockCartApi).

use crate::http::{HttpClient, HttpError, Method};
use crate::model::{AddToCart, CartSnapshot, DashboardStats};
use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

pub const CART_PATH: &str = "/api/cart";
pub const CART_ADD_PATH: &str = "/api/cart/add";
pub const STATISTICS_PATH: &str = "/api/owner/statistics";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Request body could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http(HttpError::Unauthorized))
    }

    /// A rejection from the server with the given message, as the mock hands out.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http(HttpError::Status {
            status,
            message: message.into(),
        })
    }

    pub fn network(reason: impl Into<String>) -> Self {
        ApiError::Http(HttpError::Transport(reason.into()))
    }
}

#[async_trait]
pub trait CartApi: Send + Sync {
    async fn fetch_cart(&self) -> Result<CartSnapshot, ApiError>;

    /// Returns the server's confirmation text.
    async fn add_item(&self, request: AddToCart) -> Result<String, ApiError>;

    async fn remove_item(&self, cart_item_id: u64) -> Result<String, ApiError>;
}

#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch_statistics(&self) -> Result<DashboardStats, ApiError>;
}

/// Both APIs over an authenticated [`HttpClient`].
#[derive(Clone)]
pub struct HttpApi {
    http: HttpClient,
}

impl HttpApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CartApi for HttpApi {
    #[instrument(skip(self))]
    async fn fetch_cart(&self) -> Result<CartSnapshot, ApiError> {
        Ok(self.http.get(CART_PATH).await?)
    }

    #[instrument(skip(self))]
    async fn add_item(&self, request: AddToCart) -> Result<String, ApiError> {
        let body = serde_json::to_string(&request)?;
        Ok(self
            .http
            .exchange(Method::Post, CART_ADD_PATH, Some(body))
            .await?)
    }

    #[instrument(skip(self))]
    async fn remove_item(&self, cart_item_id: u64) -> Result<String, ApiError> {
        let path = format!("{CART_PATH}/remove/{cart_item_id}");
        Ok(self.http.exchange(Method::Delete, &path, None).await?)
    }
}

#[async_trait]
impl DashboardApi for HttpApi {
    #[instrument(skip(self))]
    async fn fetch_statistics(&self) -> Result<DashboardStats, ApiError> {
        Ok(self.http.get(STATISTICS_PATH).await?)
    }
}

//! # Badge Client
//!
//! Page-facing handle to the cart badge.
use crate::badge_actor::{BadgeError, BadgeRequest, CartBadge};
use crate::model::{BadgeState, RefreshOutcome};
use tracing::instrument;
use ui_runtime::ComponentClient;

#[derive(Clone)]
pub struct BadgeClient {
    inner: ComponentClient<CartBadge>,
}

fn unavailable(e: ui_runtime::RuntimeError) -> BadgeError {
    BadgeError::ComponentUnavailable(e.to_string())
}

impl BadgeClient {
    pub fn new(inner: ComponentClient<CartBadge>) -> Self {
        Self { inner }
    }

    /// Re-reads the count from the cart and waits until that fetch settles.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<RefreshOutcome, BadgeError> {
        self.inner
            .call(|respond_to| BadgeRequest::Refresh { respond_to })
            .await
            .map_err(unavailable)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, count: u32) -> Result<BadgeState, BadgeError> {
        self.inner
            .call(|respond_to| BadgeRequest::Update { count, respond_to })
            .await
            .map_err(unavailable)
    }

    #[instrument(skip(self))]
    pub async fn increment(&self, by: u32) -> Result<BadgeState, BadgeError> {
        self.inner
            .call(|respond_to| BadgeRequest::Increment { by, respond_to })
            .await
            .map_err(unavailable)
    }

    /// Lowers the count by `by`, stopping at zero.
    #[instrument(skip(self))]
    pub async fn decrement(&self, by: u32) -> Result<BadgeState, BadgeError> {
        self.inner
            .call(|respond_to| BadgeRequest::Decrement { by, respond_to })
            .await
            .map_err(unavailable)
    }

    pub async fn state(&self) -> Result<BadgeState, BadgeError> {
        self.inner
            .call(|respond_to| BadgeRequest::State { respond_to })
            .await
            .map_err(unavailable)
    }
}

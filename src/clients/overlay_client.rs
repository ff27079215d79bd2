//! # Overlay Client
use crate::model::OverlayState;
use crate::overlay_actor::{CartOverlay, OverlayError, OverlayRequest};
use tokio::sync::watch;
use tracing::instrument;
use ui_runtime::ComponentClient;

#[derive(Clone)]
pub struct OverlayClient {
    inner: ComponentClient<CartOverlay>,
}

fn unavailable(e: ui_runtime::RuntimeError) -> OverlayError {
    OverlayError::ComponentUnavailable(e.to_string())
}

impl OverlayClient {
    pub fn new(inner: ComponentClient<CartOverlay>) -> Self {
        Self { inner }
    }

    /// Opens the overlay and starts loading the cart. No-op while already open.
    #[instrument(skip(self))]
    pub async fn open(&self) -> Result<OverlayState, OverlayError> {
        self.open_with(false).await
    }

    /// Opens (or re-opens) the overlay and fetches the cart even if it is already showing.
    #[instrument(skip(self))]
    pub async fn open_forced(&self) -> Result<OverlayState, OverlayError> {
        self.open_with(true).await
    }

    async fn open_with(&self, force: bool) -> Result<OverlayState, OverlayError> {
        self.inner
            .call(|respond_to| OverlayRequest::Open { force, respond_to })
            .await
            .map_err(unavailable)
    }

    #[instrument(skip(self))]
    pub async fn close(&self) -> Result<OverlayState, OverlayError> {
        self.inner
            .call(|respond_to| OverlayRequest::Close { respond_to })
            .await
            .map_err(unavailable)
    }

    #[instrument(skip(self))]
    pub async fn toggle(&self) -> Result<OverlayState, OverlayError> {
        self.inner
            .call(|respond_to| OverlayRequest::Toggle { respond_to })
            .await
            .map_err(unavailable)
    }

    /// Re-fetches the cart if the overlay is open. Returns the resulting state.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<OverlayState, OverlayError> {
        self.inner
            .call(|respond_to| OverlayRequest::Reload { respond_to })
            .await
            .map_err(unavailable)
    }

    pub async fn state(&self) -> Result<OverlayState, OverlayError> {
        self.inner
            .call(|respond_to| OverlayRequest::State { respond_to })
            .await
            .map_err(unavailable)
    }

    /// Receiver that observes every state change from now on.
    pub async fn subscribe(&self) -> Result<watch::Receiver<OverlayState>, OverlayError> {
        self.inner
            .call(|respond_to| OverlayRequest::Subscribe { respond_to })
            .await
            .map_err(unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_runtime::mock::{create_mock_client, next_request};

    #[tokio::test]
    async fn test_open_forced_sets_flag() {
        let (client, mut receiver) = create_mock_client::<CartOverlay>(4);
        let overlay = OverlayClient::new(client);

        let task = tokio::spawn(async move { overlay.open_forced().await });

        match next_request::<CartOverlay>(&mut receiver).await {
            Some(OverlayRequest::Open { force, respond_to }) => {
                assert!(force);
                respond_to.send(OverlayState::Loading).unwrap();
            }
            other => panic!("Expected Open, got {:?}", other),
        }
        assert_eq!(task.await.unwrap(), Ok(OverlayState::Loading));
    }

    #[tokio::test]
    async fn test_closed_component_is_reported() {
        let (client, receiver) = create_mock_client::<CartOverlay>(4);
        drop(receiver);
        let overlay = OverlayClient::new(client);

        assert!(matches!(
            overlay.close().await,
            Err(OverlayError::ComponentUnavailable(_))
        ));
    }
}

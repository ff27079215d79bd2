//! # Chart Client
//!
//! Dashboard-facing API of the chart component.
use crate::chart_actor::{ChartError, ChartRegistry, ChartRequest, ORDER_STATUS, POPULAR_ITEMS, REVENUE};
use crate::model::{ChartConfig, DashboardData, Series};
use tracing::{debug, instrument, warn};
use ui_runtime::ComponentClient;

#[derive(Clone)]
pub struct ChartClient {
    inner: ComponentClient<ChartRegistry>,
}

fn unavailable(e: ui_runtime::RuntimeError) -> ChartError {
    ChartError::ComponentUnavailable(e.to_string())
}

impl ChartClient {
    pub fn new(inner: ComponentClient<ChartRegistry>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, config))]
    pub async fn render(&self, key: &str, config: ChartConfig) -> Result<(), ChartError> {
        debug!("Sending request");
        self.inner
            .call(|respond_to| ChartRequest::Render {
                key: key.to_string(),
                config: Box::new(config),
                respond_to,
            })
            .await
            .map_err(unavailable)?
    }

    /// Returns `false` when no chart is drawn under `key`.
    #[instrument(skip(self, series))]
    pub async fn update(&self, key: &str, series: Series) -> Result<bool, ChartError> {
        self.inner
            .call(|respond_to| ChartRequest::Update {
                key: key.to_string(),
                labels: series.labels.unwrap_or_default(),
                values: series.values.unwrap_or_default(),
                respond_to,
            })
            .await
            .map_err(unavailable)
    }

    #[instrument(skip(self))]
    pub async fn destroy_all(&self) -> Result<usize, ChartError> {
        self.inner
            .call(|respond_to| ChartRequest::DestroyAll { respond_to })
            .await
            .map_err(unavailable)
    }

    pub async fn keys(&self) -> Result<Vec<String>, ChartError> {
        self.inner
            .call(|respond_to| ChartRequest::Keys { respond_to })
            .await
            .map_err(unavailable)
    }

    /// Draws every dashboard chart whose dataset is present. Charts without a canvas are
    /// skipped; returns how many were drawn.
    #[instrument(skip(self, data))]
    pub async fn init(&self, data: &DashboardData) -> Result<usize, ChartError> {
        let wanted = [
            (REVENUE, data.revenue.as_ref().map(ChartConfig::revenue)),
            (ORDER_STATUS, data.order_status.as_ref().map(ChartConfig::order_status)),
            (POPULAR_ITEMS, data.popular_items.as_ref().map(ChartConfig::popular_items)),
        ];

        let mut drawn = 0;
        for (key, config) in wanted {
            let Some(config) = config else { continue };
            match self.render(key, config).await {
                Ok(()) => drawn += 1,
                Err(ChartError::MissingCanvas { .. }) => {}
                Err(ChartError::Engine(reason)) => warn!(key, %reason, "Chart could not be drawn"),
                Err(e) => return Err(e),
            }
        }
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_runtime::mock::{create_mock_client, next_request};

    #[tokio::test]
    async fn test_update_sends_labels_and_values() {
        let (client, mut receiver) = create_mock_client::<ChartRegistry>(4);
        let charts = ChartClient::new(client);

        let task = tokio::spawn(async move {
            charts
                .update("revenue", Series::new(["Mon"], vec![120.0]))
                .await
        });

        match next_request::<ChartRegistry>(&mut receiver).await {
            Some(ChartRequest::Update {
                key,
                labels,
                values,
                respond_to,
            }) => {
                assert_eq!(key, "revenue");
                assert_eq!(labels, vec!["Mon".to_string()]);
                assert_eq!(values, vec![120.0]);
                respond_to.send(true).unwrap();
            }
            other => panic!("Expected Update, got {:?}", other),
        }

        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_closed_component_is_reported() {
        let (client, receiver) = create_mock_client::<ChartRegistry>(4);
        drop(receiver);

        let result = ChartClient::new(client).destroy_all().await;
        assert!(matches!(result, Err(ChartError::ComponentUnavailable(_))));
    }
}

use super::{ChartEngine, ChartError, ChartHandle, ChartRequest};
use crate::model::ChartConfig;
use async_trait::async_trait;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, info, warn};
use ui_runtime::{Component, Mailbox};

struct Instance {
    handle: ChartHandle,
    config: ChartConfig,
}

/// Chart key → live engine instance. At most one instance per key.
#[derive(Default)]
pub struct ChartRegistry {
    charts: HashMap<String, Instance>,
}

/// Canvas element id for a chart key (`revenue` → `revenueChart`).
pub fn canvas_for(key: &str) -> String {
    format!("{key}Chart")
}

impl ChartRegistry {
    fn render(
        &mut self,
        key: String,
        config: ChartConfig,
        engine: &dyn ChartEngine,
    ) -> Result<(), ChartError> {
        let canvas = canvas_for(&key);
        if !engine.canvas_exists(&canvas) {
            warn!(%key, %canvas, "Canvas not found, chart skipped");
            return Err(ChartError::MissingCanvas { key, canvas });
        }

        // The canvas can't host two instances: release the old one first.
        if let Some(previous) = self.charts.remove(&key) {
            debug!(%key, handle = %previous.handle, "Destroying previous chart");
            engine.destroy(previous.handle);
        }

        let handle = engine.create(&canvas, &config).map_err(ChartError::Engine)?;
        info!(%key, %handle, kind = ?config.kind, "Chart rendered");
        self.charts.insert(key, Instance { handle, config });
        Ok(())
    }

    fn update(
        &mut self,
        key: &str,
        labels: Vec<String>,
        values: Vec<f64>,
        engine: &dyn ChartEngine,
    ) -> bool {
        match self.charts.get_mut(key) {
            Some(instance) => {
                instance.config.apply(labels, values);
                engine.update(instance.handle, &instance.config.data);
                debug!(%key, "Chart updated");
                true
            }
            None => false,
        }
    }

    fn destroy_all(&mut self, engine: &dyn ChartEngine) -> usize {
        let count = self.charts.len();
        for (key, instance) in self.charts.drain() {
            debug!(%key, handle = %instance.handle, "Destroying chart");
            engine.destroy(instance.handle);
        }
        count
    }
}

#[async_trait]
impl Component for ChartRegistry {
    type Request = ChartRequest;
    type Signal = Infallible;
    type Context = Arc<dyn ChartEngine>;

    async fn handle_request(
        &mut self,
        request: ChartRequest,
        engine: &Self::Context,
        _mailbox: &Mailbox<Infallible>,
    ) {
        match request {
            ChartRequest::Render {
                key,
                config,
                respond_to,
            } => {
                let _ = respond_to.send(self.render(key, *config, engine.as_ref()));
            }
            ChartRequest::Update {
                key,
                labels,
                values,
                respond_to,
            } => {
                let _ = respond_to.send(self.update(&key, labels, values, engine.as_ref()));
            }
            ChartRequest::DestroyAll { respond_to } => {
                let _ = respond_to.send(self.destroy_all(engine.as_ref()));
            }
            ChartRequest::Keys { respond_to } => {
                let mut keys: Vec<String> = self.charts.keys().cloned().collect();
                keys.sort();
                let _ = respond_to.send(keys);
            }
        }
    }

    async fn handle_signal(
        &mut self,
        signal: Infallible,
        _engine: &Self::Context,
        _mailbox: &Mailbox<Infallible>,
    ) {
        match signal {}
    }

    async fn on_unmount(&mut self, engine: &Self::Context) {
        self.destroy_all(engine.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Series;
    use crate::testing::{ChartEvent, RecordingChartEngine};

    fn week(values: Vec<f64>) -> ChartConfig {
        ChartConfig::revenue(&Series::new(["Mon", "Tue", "Wed"], values))
    }

    #[test]
    fn test_render_twice_destroys_before_creating() {
        let engine = RecordingChartEngine::dashboard();
        let mut registry = ChartRegistry::default();

        registry
            .render("revenue".to_string(), week(vec![1.0, 2.0, 3.0]), &engine)
            .unwrap();
        registry
            .render("revenue".to_string(), week(vec![4.0, 5.0, 6.0]), &engine)
            .unwrap();

        assert_eq!(
            engine.events(),
            vec![
                ChartEvent::Created {
                    handle: ChartHandle(1),
                    canvas: "revenueChart".to_string()
                },
                ChartEvent::Destroyed {
                    handle: ChartHandle(1)
                },
                ChartEvent::Created {
                    handle: ChartHandle(2),
                    canvas: "revenueChart".to_string()
                },
            ]
        );
        assert_eq!(engine.live_count(), 1);
        let live = engine.config_on("revenueChart").unwrap();
        assert_eq!(live.data.datasets[0].data, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_update_redraws_in_place() {
        let engine = RecordingChartEngine::dashboard();
        let mut registry = ChartRegistry::default();
        registry
            .render("revenue".to_string(), week(vec![1.0, 2.0, 3.0]), &engine)
            .unwrap();

        let labels = vec!["Thu".to_string(), "Fri".to_string()];
        assert!(registry.update("revenue", labels.clone(), vec![7.0, 8.0], &engine));
        assert!(!registry.update("orderStatus", labels, vec![1.0], &engine));

        let events = engine.events();
        assert_eq!(
            events.last(),
            Some(&ChartEvent::Updated {
                handle: ChartHandle(1)
            })
        );
        assert!(!events
            .iter()
            .any(|e| matches!(e, ChartEvent::Destroyed { .. })));
        let live = engine.config_on("revenueChart").unwrap();
        assert_eq!(live.data.labels, vec!["Thu".to_string(), "Fri".to_string()]);
        assert_eq!(engine.live_count(), 1);
    }

    #[test]
    fn test_missing_canvas_keeps_existing_charts() {
        let engine = RecordingChartEngine::dashboard();
        let mut registry = ChartRegistry::default();
        registry
            .render("revenue".to_string(), week(vec![1.0, 2.0, 3.0]), &engine)
            .unwrap();

        let result = registry.render("nope".to_string(), week(vec![1.0]), &engine);

        assert_eq!(
            result,
            Err(ChartError::MissingCanvas {
                key: "nope".to_string(),
                canvas: "nopeChart".to_string()
            })
        );
        assert_eq!(engine.live_count(), 1);
        assert_eq!(registry.destroy_all(&engine), 1);
        assert_eq!(engine.live_count(), 0);
    }
}

use crate::chart_actor::{ChartEngine, ChartHandle};
use crate::model::{ChartConfig, ChartData};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Created { handle: ChartHandle, canvas: String },
    Updated { handle: ChartHandle },
    Destroyed { handle: ChartHandle },
}

#[derive(Default)]
struct Recording {
    canvases: HashSet<String>,
    events: Vec<ChartEvent>,
    live: HashMap<ChartHandle, (String, ChartConfig)>,
    next_handle: u64,
}

/// A [`ChartEngine`] that draws nothing and remembers everything.
///
/// Only canvases registered with [`with_canvas`](Self::with_canvas) exist. Clones share
/// the recording.
#[derive(Clone, Default)]
pub struct RecordingChartEngine {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingChartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose page has all three dashboard canvases.
    pub fn dashboard() -> Self {
        Self::new()
            .with_canvas("revenueChart")
            .with_canvas("orderStatusChart")
            .with_canvas("popularItemsChart")
    }

    pub fn with_canvas(self, canvas: &str) -> Self {
        self.lock().canvases.insert(canvas.to_string());
        self
    }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<ChartEvent> {
        self.lock().events.clone()
    }

    pub fn live_count(&self) -> usize {
        self.lock().live.len()
    }

    /// The current configuration of the live instance on `canvas`.
    pub fn config_on(&self, canvas: &str) -> Option<ChartConfig> {
        self.lock()
            .live
            .values()
            .find(|(c, _)| c == canvas)
            .map(|(_, config)| config.clone())
    }
}

impl ChartEngine for RecordingChartEngine {
    fn canvas_exists(&self, canvas: &str) -> bool {
        self.lock().canvases.contains(canvas)
    }

    fn create(&self, canvas: &str, config: &ChartConfig) -> Result<ChartHandle, String> {
        let mut recording = self.lock();
        if recording.live.values().any(|(c, _)| c == canvas) {
            return Err(format!("Canvas is already in use: {canvas}"));
        }
        recording.next_handle += 1;
        let handle = ChartHandle(recording.next_handle);
        recording
            .live
            .insert(handle, (canvas.to_string(), config.clone()));
        recording.events.push(ChartEvent::Created {
            handle,
            canvas: canvas.to_string(),
        });
        Ok(handle)
    }

    fn update(&self, handle: ChartHandle, data: &ChartData) {
        let mut guard = self.lock();
        let recording = &mut *guard;
        if let Some((_, config)) = recording.live.get_mut(&handle) {
            config.data = data.clone();
            recording.events.push(ChartEvent::Updated { handle });
        }
    }

    fn destroy(&self, handle: ChartHandle) {
        let mut recording = self.lock();
        if recording.live.remove(&handle).is_some() {
            recording.events.push(ChartEvent::Destroyed { handle });
        }
    }
}

use crate::model::{ChartConfig, ChartData};
use std::fmt::Display;

/// Handle to a chart instance owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

impl Display for ChartHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chart_{}", self.0)
    }
}

/// The charting library, seen as an opaque renderer.
///
/// Instances are created on a named canvas from a JSON-shaped [`ChartConfig`], updated in
/// place, and must be destroyed before their canvas can be reused.
pub trait ChartEngine: Send + Sync {
    fn canvas_exists(&self, canvas: &str) -> bool;

    fn create(&self, canvas: &str, config: &ChartConfig) -> Result<ChartHandle, String>;

    /// Redraws an instance with new data.
    fn update(&self, handle: ChartHandle, data: &ChartData);

    fn destroy(&self, handle: ChartHandle);
}

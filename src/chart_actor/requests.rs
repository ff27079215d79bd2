use super::ChartError;
use crate::model::ChartConfig;
use ui_runtime::Response;

#[derive(Debug)]
pub enum ChartRequest {
    /// Draw `config` under `key`, replacing whatever was there.
    Render {
        key: String,
        config: Box<ChartConfig>,
        respond_to: Response<Result<(), ChartError>>,
    },
    /// Replace labels and values of an existing chart. Replies `false` for unknown keys.
    Update {
        key: String,
        labels: Vec<String>,
        values: Vec<f64>,
        respond_to: Response<bool>,
    },
    /// Destroy every instance. Replies with how many there were.
    DestroyAll { respond_to: Response<usize> },
    /// Keys with a live instance, sorted.
    Keys { respond_to: Response<Vec<String>> },
}

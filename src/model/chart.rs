//! Chart configurations in the JSON shape the charting engine consumes.
//!
//! The three builders reproduce the owner dashboard: a revenue line, an order-status
//! doughnut and a popular-items bar chart. Missing labels or values fall back to the
//! dashboard's placeholders so an empty shop still gets an axis.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const PRIMARY_COLOR: &str = "#667eea";
pub const UNKNOWN_STATUS_COLOR: &str = "#9ca3af";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const STATUS_LABELS: [&str; 4] = ["Pending", "Preparing", "Ready", "Delivered"];
const STATUS_COLORS: [(&str, &str); 5] = [
    ("PENDING", "#fbbf24"),
    ("PREPARING", "#3b82f6"),
    ("READY", "#10b981"),
    ("DELIVERED", "#06b6d4"),
    ("CANCELLED", "#ef4444"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

/// Labels and values for one chart. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
}

impl Series {
    pub fn new<L: Into<String>>(labels: impl IntoIterator<Item = L>, values: Vec<f64>) -> Self {
        Self {
            labels: Some(labels.into_iter().map(Into::into).collect()),
            values: Some(values),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Colors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    /// Engine-specific styling (point radius, bar thickness…).
    #[serde(flatten)]
    pub style: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

/// Doughnut slice colour for an order status label.
pub fn status_color(label: &str) -> &'static str {
    STATUS_COLORS
        .iter()
        .find(|(status, _)| *status == label)
        .map(|(_, color)| *color)
        .unwrap_or(UNKNOWN_STATUS_COLOR)
}

fn labels_or(series: &Series, fallback: &[&str]) -> Vec<String> {
    series
        .labels
        .clone()
        .unwrap_or_else(|| fallback.iter().map(|s| s.to_string()).collect())
}

fn values_or(series: &Series, len: usize) -> Vec<f64> {
    series.values.clone().unwrap_or_else(|| vec![0.0; len])
}

fn style(entries: Value) -> serde_json::Map<String, Value> {
    match entries {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

fn tooltip() -> Value {
    json!({
        "backgroundColor": "rgba(0, 0, 0, 0.8)",
        "padding": 12,
        "titleFont": { "size": 14, "weight": "bold" },
        "bodyFont": { "size": 13 }
    })
}

fn animation() -> Value {
    json!({ "duration": 1000, "easing": "easeInOutQuart" })
}

impl ChartConfig {
    pub fn revenue(series: &Series) -> Self {
        let dataset = Dataset {
            label: Some("Revenue (₹)".to_string()),
            data: values_or(series, WEEKDAYS.len()),
            background_color: Some(Colors::Single("rgba(102, 126, 234, 0.1)".to_string())),
            border_color: Some(PRIMARY_COLOR.to_string()),
            tension: Some(0.4),
            fill: Some(true),
            style: style(json!({
                "pointRadius": 4,
                "pointHoverRadius": 6,
                "pointBackgroundColor": "#fff",
                "pointBorderWidth": 2
            })),
        };
        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels: labels_or(series, &WEEKDAYS),
                datasets: vec![dataset],
            },
            options: json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": { "legend": { "display": false }, "tooltip": tooltip() },
                "scales": {
                    "y": { "beginAtZero": true, "grid": { "color": "rgba(0, 0, 0, 0.05)" } },
                    "x": { "grid": { "display": false } }
                },
                "animation": animation()
            }),
        }
    }

    pub fn order_status(series: &Series) -> Self {
        // Without labels the first four status colours are used in order.
        let colors = match &series.labels {
            Some(labels) => labels.iter().map(|l| status_color(l).to_string()).collect(),
            None => STATUS_COLORS
                .iter()
                .take(STATUS_LABELS.len())
                .map(|(_, c)| c.to_string())
                .collect(),
        };
        let dataset = Dataset {
            data: values_or(series, STATUS_LABELS.len()),
            background_color: Some(Colors::PerPoint(colors)),
            border_color: Some("#fff".to_string()),
            style: style(json!({ "borderWidth": 2, "hoverOffset": 10 })),
            ..Dataset::default()
        };
        let mut animation = animation();
        animation["animateRotate"] = json!(true);
        animation["animateScale"] = json!(true);
        Self {
            kind: ChartKind::Doughnut,
            data: ChartData {
                labels: labels_or(series, &STATUS_LABELS),
                datasets: vec![dataset],
            },
            options: json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {
                    "legend": {
                        "position": "bottom",
                        "labels": {
                            "padding": 15,
                            "font": { "size": 12 },
                            "usePointStyle": true,
                            "pointStyle": "circle"
                        }
                    },
                    "tooltip": tooltip()
                },
                "animation": animation
            }),
        }
    }

    pub fn popular_items(series: &Series) -> Self {
        const PLACEHOLDERS: [&str; 5] = ["Item 1", "Item 2", "Item 3", "Item 4", "Item 5"];
        let dataset = Dataset {
            label: Some("Orders".to_string()),
            data: values_or(series, PLACEHOLDERS.len()),
            background_color: Some(Colors::Single(PRIMARY_COLOR.to_string())),
            style: style(json!({ "borderRadius": 6, "barThickness": 40 })),
            ..Dataset::default()
        };
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: labels_or(series, &PLACEHOLDERS),
                datasets: vec![dataset],
            },
            options: json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": { "legend": { "display": false }, "tooltip": tooltip() },
                "scales": {
                    "y": {
                        "beginAtZero": true,
                        "ticks": { "stepSize": 1 },
                        "grid": { "color": "rgba(0, 0, 0, 0.05)" }
                    },
                    "x": { "grid": { "display": false } }
                },
                "animation": animation()
            }),
        }
    }

    /// Replaces labels and the first dataset's values, as an in-place update does.
    pub fn apply(&mut self, labels: Vec<String>, values: Vec<f64>) {
        self.data.labels = labels;
        match self.data.datasets.first_mut() {
            Some(first) => first.data = values,
            None => self.data.datasets.push(Dataset {
                data: values,
                ..Dataset::default()
            }),
        }
    }
}

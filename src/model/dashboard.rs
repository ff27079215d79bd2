use super::chart::Series;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/owner/statistics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub pending_orders_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_orders: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_items_count: Option<u64>,
    #[serde(default)]
    pub top_selling_items: Vec<TopItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopItem {
    #[serde(default)]
    pub menu_item_id: Option<u64>,
    pub menu_item_name: String,
    #[serde(default)]
    pub total_quantity: u64,
}

/// Datasets for the dashboard charts. A chart is drawn only when its dataset is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default, rename = "revenueData")]
    pub revenue: Option<Series>,
    #[serde(default, rename = "orderStatusData")]
    pub order_status: Option<Series>,
    #[serde(default)]
    pub popular_items: Option<Series>,
}

impl DashboardData {
    /// Popular items come from the top sellers; the stats endpoint has no revenue or
    /// status breakdown, so those charts stay out.
    pub fn from_stats(stats: &DashboardStats) -> Self {
        let popular_items = (!stats.top_selling_items.is_empty()).then(|| Series {
            labels: Some(
                stats
                    .top_selling_items
                    .iter()
                    .map(|item| item.menu_item_name.clone())
                    .collect(),
            ),
            values: Some(
                stats
                    .top_selling_items
                    .iter()
                    .map(|item| item.total_quantity as f64)
                    .collect(),
            ),
        });
        Self {
            popular_items,
            ..Self::default()
        }
    }
}

/// One animated figure on the dashboard header.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    pub prefix: &'static str,
}

impl DashboardStats {
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                label: "Total Revenue",
                value: self.total_revenue.max(0.0) as u64,
                prefix: "₹",
            },
            StatCard {
                label: "Total Orders",
                value: self.total_orders.unwrap_or(0),
                prefix: "",
            },
            StatCard {
                label: "Pending Orders",
                value: self.pending_orders_count,
                prefix: "",
            },
            StatCard {
                label: "Menu Items",
                value: self.menu_items_count.unwrap_or(0),
                prefix: "",
            },
        ]
    }
}

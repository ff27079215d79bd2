use serde::{Deserialize, Deserializer, Serialize};

/// The cart as returned by `GET /api/cart`. Never stored locally.
///
/// Only `items` and `totalAmount` drive rendering; the other fields are echoed by the
/// backend and kept for callers that want them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    /// Absent and `null` both mean "no items".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

impl CartSnapshot {
    pub fn with_items(items: Vec<CartLine>, total_amount: Option<f64>) -> Self {
        Self {
            items,
            total_amount,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across lines, which is what the badge shows.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Sum of line subtotals, for when the server leaves `totalAmount` out.
    pub fn computed_total(&self) -> f64 {
        self.items.iter().map(CartLine::subtotal).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<u64>,
    #[serde(default)]
    pub menu_item_name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
}

impl CartLine {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            menu_item_name: name.into(),
            price,
            quantity,
            ..Self::default()
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Body of `POST /api/cart/add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub menu_item_id: u64,
    pub quantity: u32,
}

/// A menu item as the page knows it when the "Add to cart" button is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(id: u64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

use serde::{Deserialize, Serialize};

use super::pricing::compute_total_price;

// ============================================================================
// Order Value Objects
// ============================================================================

/// A purchase record owned by a single user
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Order {
    /// Sum of unit price times quantity across all line items
    pub fn total_price(&self) -> f64 {
        compute_total_price(&self.items)
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }
}

/// A single product line within an order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub title: String,
    pub price_per_unit: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(title: impl Into<String>, price_per_unit: f64, quantity: u32) -> Self {
        Self {
            title: title.into(),
            price_per_unit,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price_per_unit * f64::from(self.quantity)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

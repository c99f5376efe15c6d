use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::domain::order::Order;

const BUNDLED_ORDERS: &str = include_str!("../../data/orders.json");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to parse order dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate order id: {0}")]
    DuplicateOrderId(String),

    #[error("Invalid unit price {price} for item '{item}' in order {order_id}")]
    InvalidPrice {
        order_id: String,
        item: String,
        price: f64,
    },
}

// ============================================================================
// OrderStore
// ============================================================================
//
// Immutable once built. Clones share the same backing slice.
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: Arc<[Order]>,
}

impl OrderStore {
    /// Build a store from already-loaded orders, keeping their order.
    pub fn new(orders: Vec<Order>) -> Result<Self, DatasetError> {
        validate(&orders)?;
        Ok(Self {
            orders: orders.into(),
        })
    }

    /// Parse a JSON array of orders
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let orders: Vec<Order> = serde_json::from_str(json)?;
        Self::new(orders)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read order dataset {}", path.display()))?;
        let store = Self::from_json_str(&json)
            .with_context(|| format!("Invalid order dataset {}", path.display()))?;

        tracing::info!(path = %path.display(), orders = store.len(), "Loaded order dataset");
        Ok(store)
    }

    /// The sample dataset shipped with the crate
    pub fn bundled() -> Result<Self, DatasetError> {
        let store = Self::from_json_str(BUNDLED_ORDERS)?;
        tracing::info!(orders = store.len(), "Loaded bundled order dataset");
        Ok(store)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

fn validate(orders: &[Order]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(orders.len());

    for order in orders {
        if !seen.insert(order.id.as_str()) {
            return Err(DatasetError::DuplicateOrderId(order.id.clone()));
        }

        for item in &order.items {
            if !item.price_per_unit.is_finite() || item.price_per_unit < 0.0 {
                return Err(DatasetError::InvalidPrice {
                    order_id: order.id.clone(),
                    item: item.title.clone(),
                    price: item.price_per_unit,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::LineItem;

    fn order(id: &str, items: Vec<LineItem>) -> Order {
        Order {
            id: id.to_string(),
            user_id: "U1".to_string(),
            title: format!("Order {id}"),
            items,
        }
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let store = OrderStore::bundled().unwrap();
        assert_eq!(store.len(), 10);
        assert_eq!(store.orders()[0].id, "ord-001");
        assert_eq!(store.get("ord-002").unwrap().total_price(), 1472.0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = OrderStore::new(vec![order("x", vec![]), order("x", vec![])]);
        assert!(matches!(result, Err(DatasetError::DuplicateOrderId(id)) if id == "x"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = OrderStore::new(vec![order("x", vec![LineItem::new("Refund", -5.0, 1)])]);
        assert!(matches!(result, Err(DatasetError::InvalidPrice { .. })));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let result = OrderStore::new(vec![order("x", vec![LineItem::new("Bad", f64::NAN, 1)])]);
        assert!(matches!(result, Err(DatasetError::InvalidPrice { .. })));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = OrderStore::from_json_str(r#"[{ "id": "x" }]"#);
        assert!(matches!(result, Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = OrderStore::from_json_file("/nonexistent/orders.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/orders.json"));
    }

    #[test]
    fn test_clones_share_orders() {
        let store = OrderStore::new(vec![order("a", vec![])]).unwrap();
        let clone = store.clone();
        assert!(std::ptr::eq(store.orders(), clone.orders()));
        assert!(!clone.is_empty());
    }
}

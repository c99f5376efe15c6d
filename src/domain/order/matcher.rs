use std::sync::Arc;
use std::time::Instant;

use crate::metrics::QueryMetrics;
use crate::store::OrderStore;

use super::conditions::OrderCondition;
use super::errors::QueryError;
use super::query::OrdersQuery;
use super::value_objects::Order;

// ============================================================================
// Order Matcher
// ============================================================================
//
// Orchestrates: Query → Conditions → linear scan over the order store
//
// ============================================================================

/// Return every order satisfying all conditions of `query`, in input order.
pub fn find_orders<'a>(
    orders: &'a [Order],
    query: &OrdersQuery,
) -> Result<Vec<&'a Order>, QueryError> {
    let conditions = query.conditions()?;
    Ok(filter_orders(orders, &conditions))
}

fn filter_orders<'a>(orders: &'a [Order], conditions: &[OrderCondition]) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| conditions.iter().all(|condition| condition.matches(order)))
        .collect()
}

/// Runs queries against an injected, read-only order store
#[derive(Clone)]
pub struct OrderMatcher {
    store: OrderStore,
    metrics: Option<Arc<QueryMetrics>>,
}

impl OrderMatcher {
    pub fn new(store: OrderStore) -> Self {
        Self { store, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: Arc<QueryMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn find_orders(&self, query: &OrdersQuery) -> Result<Vec<&Order>, QueryError> {
        let started = Instant::now();

        let conditions = match query.conditions() {
            Ok(conditions) => conditions,
            Err(error) => {
                tracing::warn!(kind = error.kind(), error = %error, "Rejected order query");
                if let Some(metrics) = &self.metrics {
                    metrics.record_rejection(&error);
                }
                return Err(error);
            }
        };

        tracing::debug!(
            conditions = ?conditions.iter().map(OrderCondition::name).collect::<Vec<_>>(),
            orders = self.store.len(),
            "Scanning orders"
        );

        let matched = filter_orders(self.store.orders(), &conditions);

        tracing::debug!(matched = matched.len(), "Order query complete");
        if let Some(metrics) = &self.metrics {
            metrics.record_match(matched.len(), started.elapsed().as_secs_f64());
        }

        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{LineItem, TotalPriceFilter};

    fn sample_orders() -> Vec<Order> {
        vec![
            Order {
                id: "a".into(),
                user_id: "U1".into(),
                title: "Stationery".into(),
                items: vec![LineItem::new("Pencil", 2.0, 5), LineItem::new("Eraser", 1.0, 2)],
            },
            Order {
                id: "b".into(),
                user_id: "U2".into(),
                title: "Laptop".into(),
                items: vec![LineItem::new("Laptop", 1200.0, 1)],
            },
            Order {
                id: "c".into(),
                user_id: "U1".into(),
                title: "Laptop accessories".into(),
                items: vec![LineItem::new("Sleeve", 30.0, 1), LineItem::new("Charger", 60.0, 1)],
            },
        ]
    }

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn test_find_orders_combines_conditions() {
        let orders = sample_orders();
        let query = OrdersQuery::new().with_search("laptop").with_user_ids(["U1"]);
        let found = find_orders(&orders, &query).unwrap();
        assert_eq!(ids(&found), vec!["c"]);
    }

    #[test]
    fn test_find_orders_preserves_input_order() {
        let orders = sample_orders();
        let query = OrdersQuery::new().with_total_price(TotalPriceFilter::between(Some(5.0), None));
        let found = find_orders(&orders, &query).unwrap();
        assert_eq!(ids(&found), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_find_orders_propagates_validation_error() {
        let orders = sample_orders();
        assert_eq!(find_orders(&orders, &OrdersQuery::new()), Err(QueryError::NoCondition));
    }

    #[test]
    fn test_find_orders_on_empty_collection() {
        let query = OrdersQuery::new().with_items_count(1);
        assert!(find_orders(&[], &query).unwrap().is_empty());
    }

    #[test]
    fn test_matcher_records_metrics() {
        let metrics = Arc::new(QueryMetrics::new().unwrap());
        let matcher = OrderMatcher::new(OrderStore::new(sample_orders()).unwrap())
            .with_metrics(metrics.clone());

        let found = matcher.find_orders(&OrdersQuery::new().with_items_count(2)).unwrap();
        assert_eq!(ids(&found), vec!["a", "c"]);
        assert!(matcher.find_orders(&OrdersQuery::new().with_search("no")).is_err());

        let gathered = metrics.registry().gather();
        let queries = gathered.iter().find(|m| m.name() == "order_queries_total").unwrap();
        assert_eq!(queries.metric.len(), 2); // matched and rejected
    }
}

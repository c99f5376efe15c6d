// ============================================================================
// order_query - Filter a read-only order collection with composable conditions
// ============================================================================

pub mod config;
pub mod domain;
pub mod metrics;
pub mod store;

pub use domain::order::{
    compute_total_price, find_orders, LineItem, Order, OrderCondition, OrderMatcher, OrdersQuery,
    PriceBound, QueryError, TotalPriceFilter,
};
pub use metrics::QueryMetrics;
pub use store::{DatasetError, OrderStore};

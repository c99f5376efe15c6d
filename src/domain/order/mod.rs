// ============================================================================
// Order Domain - Order records and the queries that select them
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (Order, LineItem)
// - Pricing (compute_total_price)
// - Query (OrdersQuery, TotalPriceFilter)
// - Conditions (OrderCondition predicates built from a query)
// - Errors (QueryError enum)
// - Matcher (find_orders, OrderMatcher)
//
// ============================================================================

pub mod value_objects;
pub mod pricing;
pub mod query;
pub mod conditions;
pub mod errors;
pub mod matcher;

// Re-export for convenience
pub use value_objects::*;
pub use pricing::*;
pub use query::*;
pub use conditions::*;
pub use errors::*;
pub use matcher::*;

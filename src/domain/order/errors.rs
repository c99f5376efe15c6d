use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Order Query Validation Errors
// ============================================================================

/// Which bound of a total price filter was invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBound {
    Eq,
    Gt,
    Lt,
}

impl PriceBound {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBound::Eq => "eq",
            PriceBound::Gt => "gt",
            PriceBound::Lt => "lt",
        }
    }
}

impl fmt::Display for PriceBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("Search query is too short: {0} characters, at least 3 required")]
    QueryTooShort(usize),

    #[error("Items count cannot be negative: {0}")]
    ItemsCountNegative(i64),

    #[error("Total price argument '{0}' cannot be negative")]
    TotalPriceArgNegative(PriceBound),

    #[error("Total price 'eq' cannot be combined with 'gt' or 'lt'")]
    TotalPriceFormat,

    #[error("Query must contain at least one condition")]
    NoCondition,
}

impl QueryError {
    /// Stable label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::QueryTooShort(_) => "query_too_short",
            QueryError::ItemsCountNegative(_) => "items_count_negative",
            QueryError::TotalPriceArgNegative(_) => "total_price_arg_negative",
            QueryError::TotalPriceFormat => "total_price_format",
            QueryError::NoCondition => "no_condition",
        }
    }

    /// Every query error is caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_bound_display() {
        assert_eq!(PriceBound::Eq.to_string(), "eq");
        assert_eq!(PriceBound::Gt.to_string(), "gt");
        assert_eq!(PriceBound::Lt.to_string(), "lt");
    }

    #[test]
    fn test_error_messages_name_the_bound() {
        let err = QueryError::TotalPriceArgNegative(PriceBound::Lt);
        assert_eq!(err.to_string(), "Total price argument 'lt' cannot be negative");
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let errors = [
            QueryError::QueryTooShort(2),
            QueryError::ItemsCountNegative(-1),
            QueryError::TotalPriceArgNegative(PriceBound::Eq),
            QueryError::TotalPriceFormat,
            QueryError::NoCondition,
        ];

        let mut kinds: Vec<_> = errors.iter().map(QueryError::kind).collect();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
        assert!(errors.iter().all(QueryError::is_client_error));
    }
}

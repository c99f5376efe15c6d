use std::collections::HashSet;

use super::value_objects::Order;

// ============================================================================
// Order Conditions - One predicate per query field
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCondition {
    /// Lowercased text that must appear in the order title or any item title
    Search(String),
    UserIds(HashSet<String>),
    ItemsCount(usize),
    TotalPriceEq(f64),
    /// Strict bounds, each optional
    TotalPriceRange { gt: Option<f64>, lt: Option<f64> },
}

impl OrderCondition {
    pub fn search(text: &str) -> Self {
        OrderCondition::Search(text.to_lowercase())
    }

    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderCondition::Search(needle) => {
                contains_ignore_case(&order.title, needle)
                    || order
                        .items
                        .iter()
                        .any(|item| contains_ignore_case(&item.title, needle))
            }
            OrderCondition::UserIds(user_ids) => user_ids.contains(&order.user_id),
            OrderCondition::ItemsCount(count) => order.items_count() == *count,
            OrderCondition::TotalPriceEq(eq) => order.total_price() == *eq,
            OrderCondition::TotalPriceRange { gt, lt } => {
                let total = order.total_price();
                gt.map_or(true, |gt| total > gt) && lt.map_or(true, |lt| total < lt)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OrderCondition::Search(_) => "search",
            OrderCondition::UserIds(_) => "user_ids",
            OrderCondition::ItemsCount(_) => "items_count",
            OrderCondition::TotalPriceEq(_) => "total_price_eq",
            OrderCondition::TotalPriceRange { .. } => "total_price_range",
        }
    }
}

/// `needle` must already be lowercase
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

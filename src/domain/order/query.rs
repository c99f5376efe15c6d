use serde::{Deserialize, Serialize};

use super::conditions::OrderCondition;
use super::errors::{PriceBound, QueryError};

/// Minimum length (in UTF-16 code units) accepted for a text search
pub const MIN_SEARCH_LEN: usize = 3;

// ============================================================================
// Orders Query - Optional conditions combined with logical AND
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<TotalPriceFilter>,
}

/// Either an exact total (`eq`) or an open range (`gt` and/or `lt`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalPriceFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<f64>,
}

impl TotalPriceFilter {
    pub fn eq(value: f64) -> Self {
        Self { eq: Some(value), ..Self::default() }
    }

    pub fn between(gt: Option<f64>, lt: Option<f64>) -> Self {
        Self { eq: None, gt, lt }
    }

    fn condition(&self) -> Result<OrderCondition, QueryError> {
        if let Some(eq) = self.eq {
            if self.gt.is_some() || self.lt.is_some() {
                return Err(QueryError::TotalPriceFormat);
            }
            if eq < 0.0 {
                return Err(QueryError::TotalPriceArgNegative(PriceBound::Eq));
            }
            return Ok(OrderCondition::TotalPriceEq(eq));
        }

        if matches!(self.lt, Some(lt) if lt < 0.0) {
            return Err(QueryError::TotalPriceArgNegative(PriceBound::Lt));
        }
        if matches!(self.gt, Some(gt) if gt < 0.0) {
            return Err(QueryError::TotalPriceArgNegative(PriceBound::Gt));
        }

        Ok(OrderCondition::TotalPriceRange {
            gt: self.gt,
            lt: self.lt,
        })
    }
}

impl OrdersQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_user_ids<I, S>(mut self, user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_ids = user_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_items_count(mut self, items_count: i64) -> Self {
        self.items_count = Some(items_count);
        self
    }

    pub fn with_total_price(mut self, total_price: TotalPriceFilter) -> Self {
        self.total_price = Some(total_price);
        self
    }

    /// Validate the query and build one condition per supplied field.
    ///
    /// Fields are checked in a fixed order (search, user ids, items count,
    /// total price) and the first invalid one is reported. A query that
    /// yields no condition at all is rejected with `NoCondition`.
    pub fn conditions(&self) -> Result<Vec<OrderCondition>, QueryError> {
        let mut conditions = Vec::new();

        // an empty search string counts as absent
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let len = search.encode_utf16().count();
            if len < MIN_SEARCH_LEN {
                return Err(QueryError::QueryTooShort(len));
            }
            conditions.push(OrderCondition::search(search));
        }

        if !self.user_ids.is_empty() {
            conditions.push(OrderCondition::UserIds(
                self.user_ids.iter().cloned().collect(),
            ));
        }

        if let Some(items_count) = self.items_count {
            let count = usize::try_from(items_count)
                .map_err(|_| QueryError::ItemsCountNegative(items_count))?;
            conditions.push(OrderCondition::ItemsCount(count));
        }

        if let Some(total_price) = &self.total_price {
            conditions.push(total_price.condition()?);
        }

        if conditions.is_empty() {
            return Err(QueryError::NoCondition);
        }

        Ok(conditions)
    }
}

use super::value_objects::LineItem;

// ============================================================================
// Total Price Calculation
// ============================================================================

/// Sum `price_per_unit * quantity` over every line item.
///
/// Returns `0.0` for an empty slice. No rounding is applied.
pub fn compute_total_price(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::line_total).sum()
}

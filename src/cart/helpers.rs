//! Shopping Cart Helpers
//!
//! Small pure functions shared by the cart service and its handlers.

use super::models::CartLineItem;

/// Index of the first line item whose id equals `id`.
///
/// A `None` id matches the first line item that was added without one.
pub fn position_of(items: &[CartLineItem], id: Option<&str>) -> Option<usize> {
    items.iter().position(|item| item.id.as_deref() == id)
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"Green Tea (10), Protein Shake (20)"`.
pub fn format_item_summary(items: &[CartLineItem]) -> String {
    if items.is_empty() {
        return "empty cart".to_string();
    }

    items
        .iter()
        .map(|i| {
            format!(
                "{} ({})",
                i.name.as_deref().unwrap_or("<unnamed>"),
                i.price.as_deref().unwrap_or("?")
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

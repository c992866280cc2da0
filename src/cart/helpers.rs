//! Shopping Cart Helpers
//!
//! Small pure functions over cart contents.

use super::models::Item;
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Sum of `quantity` over all items.
///
/// Summed as `u64`, so `u32` quantities cannot overflow.
pub fn total_item_count(items: &[Item]) -> u64 {
    items.iter().map(|i| u64::from(i.quantity)).sum()
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Apple, 1x Banana"`.
pub fn format_item_summary(items: &[Item]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product_name))
        .collect::<Vec<_>>()
        .join(", ")
}

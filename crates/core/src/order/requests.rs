//! API request types for order operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::Deserialize;

use super::types::Order;

/// Request payload for creating an order.
///
/// Every field is required and unknown fields are rejected, so a payload
/// either describes a complete order or fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderRequest {
    pub id: i32,
    pub item_name: String,
    pub quantity: i32,
}

impl CreateOrderRequest {
    /// Convert this request into the domain record.
    pub fn into_order(self) -> Order {
        Order {
            id: self.id,
            item_name: self.item_name,
            quantity: self.quantity,
        }
    }
}

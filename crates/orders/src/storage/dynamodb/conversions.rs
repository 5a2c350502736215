//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and orders.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use orders_core::order::Order;
use orders_core::storage::StoreError;

pub const ATTR_ID: &str = "id";
pub const ATTR_ITEM_NAME: &str = "itemName";
pub const ATTR_QUANTITY: &str = "quantity";

/// Convert an Order to a DynamoDB item.
///
/// `id` is the table's partition key. Numbers travel as decimal strings.
pub fn order_to_item(order: &Order) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), AttributeValue::N(order.id.to_string()));
    item.insert(
        ATTR_ITEM_NAME.to_string(),
        AttributeValue::S(order.item_name.clone()),
    );
    item.insert(
        ATTR_QUANTITY.to_string(),
        AttributeValue::N(order.quantity.to_string()),
    );

    item
}

/// Convert a DynamoDB item to an Order.
pub fn item_to_order(item: &HashMap<String, AttributeValue>) -> Result<Order, StoreError> {
    Ok(Order {
        id: get_i32(item, ATTR_ID)?,
        item_name: get_string(item, ATTR_ITEM_NAME)?,
        quantity: get_i32(item, ATTR_QUANTITY)?,
    })
}

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidItem(format!("Missing or invalid field: {}", key)))
}

/// Get a required number attribute that must fit in an `i32`.
fn get_i32(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i32, StoreError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| StoreError::InvalidItem(format!("Missing or invalid field: {}", key)))?;

    raw.trim()
        .parse::<i32>()
        .map_err(|e| StoreError::InvalidItem(format!("Invalid number {} ({:?}): {}", key, raw, e)))
}

use serde::{Deserialize, Serialize};

/// A single purchase line.
///
/// The `id` is assigned by the caller and doubles as the store's primary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub item_name: String,
    pub quantity: i32,
}

impl Order {
    /// Creates a new order.
    pub fn new(id: i32, item_name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id,
            item_name: item_name.into(),
            quantity,
        }
    }
}

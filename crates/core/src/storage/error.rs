use thiserror::Error;

/// Errors that can occur while talking to the order store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A conditional write found an order with the same id.
    #[error("Order already exists: {id}")]
    AlreadyExists { id: i32 },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// A stored item could not be mapped back into an order.
    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error returned when parsing a configuration enum from text fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {kind}: {value:?} (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

use thiserror::Error;

use crate::storage::StoreError;

/// Errors that can end an order operation.
///
/// The display text of each variant is exactly what the caller receives as
/// the response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The request payload is not a well-formed order.
    #[error("{0}")]
    Decode(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The response payload could not be serialized.
    #[error("{0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_displays_parser_message_verbatim() {
        let error = OrderError::Decode("expected value at line 1 column 1".to_string());
        assert_eq!(error.to_string(), "expected value at line 1 column 1");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let error: OrderError = StoreError::AlreadyExists { id: 3 }.into();
        assert_eq!(error.to_string(), "Order already exists: 3");
    }
}

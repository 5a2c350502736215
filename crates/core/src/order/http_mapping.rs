//! Pure functions for mapping order errors to HTTP status codes.

use super::OrderError;

/// Maps an [`OrderError`] to an HTTP status code.
///
/// Every failure is reported as a client error; store failures are not
/// distinguished from malformed payloads.
///
/// # Examples
///
/// ```
/// use orders_core::order::{order_error_to_status_code, OrderError};
///
/// let error = OrderError::Decode("EOF while parsing a value".to_string());
/// assert_eq!(order_error_to_status_code(&error), 400);
/// ```
pub fn order_error_to_status_code(error: &OrderError) -> u16 {
    match error {
        OrderError::Decode(_) => 400,
        OrderError::Store(_) => 400,
        OrderError::Encode(_) => 400,
    }
}

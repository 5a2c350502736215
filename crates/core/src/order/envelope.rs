//! Outbound response envelope.
//!
//! Each entry point returns exactly one [`Envelope`]; the hosting runtime
//! forwards it without inspecting the body.

use serde::Serialize;

use super::codec::{create_confirmation, encode_orders};
use super::error::OrderError;
use super::http_mapping::order_error_to_status_code;
use super::types::Order;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";

/// Status code plus text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub body: String,
    #[serde(skip)]
    pub content_type: &'static str,
}

impl Envelope {
    /// A 200 response with a plain-text body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
            content_type: TEXT_PLAIN,
        }
    }

    /// A 200 response whose body is already-serialized JSON.
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
            content_type: APPLICATION_JSON,
        }
    }

    /// An error response carrying the error message as its body.
    pub fn from_error(error: &OrderError) -> Self {
        Self {
            status_code: order_error_to_status_code(error),
            body: error.to_string(),
            content_type: TEXT_PLAIN,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Builds the envelope for a create operation from the id it stored.
pub fn create_envelope(result: Result<i32, OrderError>) -> Envelope {
    match result {
        Ok(id) => Envelope::ok(create_confirmation(id)),
        Err(error) => Envelope::from_error(&error),
    }
}

/// Builds the envelope for a list operation.
///
/// Encoding failures become error envelopes like any other failure.
pub fn list_envelope(result: Result<Vec<Order>, OrderError>) -> Envelope {
    match result.and_then(|orders| encode_orders(&orders)) {
        Ok(body) => Envelope::json(body),
        Err(error) => Envelope::from_error(&error),
    }
}

mod codec;
mod envelope;
mod error;
mod http_mapping;
mod requests;
mod types;

pub use codec::{create_confirmation, decode_order, encode_orders};
pub use envelope::{create_envelope, list_envelope, Envelope, APPLICATION_JSON, TEXT_PLAIN};
pub use error::OrderError;
pub use http_mapping::order_error_to_status_code;
pub use requests::CreateOrderRequest;
pub use types::Order;

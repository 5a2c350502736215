//! Order handlers.
//!
//! Each handler is a one-shot transform from a request to an [`Envelope`].
//! Storage goes through the repository injected in [`AppState`].

use axum::{body::Bytes, extract::State, response::Response};

use orders_core::order::{
    create_envelope, decode_order, list_envelope, Envelope, Order, OrderError,
};

use crate::{handlers::envelope::envelope_response, state::AppState};

// ============================================================================
// Create Order
// ============================================================================

/// Create an order (POST /orders).
pub async fn create_order(State(state): State<AppState>, body: Bytes) -> Response {
    envelope_response(handle_create(&state, &body).await)
}

/// Decodes `body`, stores the order and reports the outcome.
///
/// A payload that fails to decode never reaches the store.
pub async fn handle_create(state: &AppState, body: &[u8]) -> Envelope {
    create_envelope(create_order_impl(state, body).await)
}

async fn create_order_impl(state: &AppState, body: &[u8]) -> Result<i32, OrderError> {
    let order = decode_order(body)?;
    tracing::debug!(order = ?order, "Received create order request");

    state.order_repo.put_order(&order).await?;

    tracing::info!(order_id = order.id, item_name = %order.item_name, "Created order");
    Ok(order.id)
}

// ============================================================================
// List Orders
// ============================================================================

/// List all orders (GET /orders). The request body is ignored.
pub async fn list_orders(State(state): State<AppState>) -> Response {
    envelope_response(handle_list(&state).await)
}

/// Scans the store and encodes every order it returned.
pub async fn handle_list(state: &AppState) -> Envelope {
    list_envelope(list_orders_impl(state).await)
}

async fn list_orders_impl(state: &AppState) -> Result<Vec<Order>, OrderError> {
    let orders = state.order_repo.scan_orders().await?;
    tracing::info!(count = orders.len(), "Listed orders");
    Ok(orders)
}

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        orders::{create_order, list_orders},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// No timeout layer is installed: a slow store call holds the request until
/// the client or the hosting platform gives up.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .layer(cors)
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use orders_core::order::Envelope;

/// Forwards an envelope to the client as-is.
pub fn envelope_response(envelope: Envelope) -> Response {
    let status = StatusCode::from_u16(envelope.status_code).unwrap_or_else(|_| {
        tracing::error!(status = envelope.status_code, "Envelope carries an invalid status code");
        StatusCode::INTERNAL_SERVER_ERROR
    });

    if !envelope.is_success() {
        tracing::warn!(status = %status, message = %envelope.body, "API error");
    }

    (
        status,
        [(header::CONTENT_TYPE, envelope.content_type)],
        envelope.body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use orders_core::order::{OrderError, APPLICATION_JSON, TEXT_PLAIN};

    async fn body_string(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let response = envelope_response(Envelope::ok("Order ID: 1"));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_PLAIN);
        assert_eq!(body_string(response).await, "Order ID: 1");
    }

    #[tokio::test]
    async fn test_json_envelope() {
        let response = envelope_response(Envelope::json("[]"));

        assert_eq!(response.headers()[header::CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = envelope_response(Envelope::from_error(&OrderError::Decode(
            "EOF while parsing a value at line 1 column 0".to_string(),
        )));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            "EOF while parsing a value at line 1 column 0"
        );
    }
}

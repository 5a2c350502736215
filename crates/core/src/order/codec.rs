//! Request decoding and response encoding for order payloads.

use super::error::OrderError;
use super::requests::CreateOrderRequest;
use super::types::Order;

/// Decodes a raw request body into an [`Order`].
///
/// Fails with [`OrderError::Decode`] carrying the parser's message when the
/// body is not a JSON object with exactly `id`, `itemName` and `quantity`.
pub fn decode_order(body: &[u8]) -> Result<Order, OrderError> {
    serde_json::from_slice::<CreateOrderRequest>(body)
        .map(CreateOrderRequest::into_order)
        .map_err(|e| OrderError::Decode(e.to_string()))
}

/// Encodes a list of orders as a JSON array.
pub fn encode_orders(orders: &[Order]) -> Result<String, OrderError> {
    serde_json::to_string(orders).map_err(|e| OrderError::Encode(e.to_string()))
}

/// Human-readable confirmation for a created order.
pub fn create_confirmation(id: i32) -> String {
    format!("Order ID: {id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_payload() {
        let order = decode_order(br#"{"id":1,"itemName":"Widget","quantity":5}"#).unwrap();

        assert_eq!(order, Order::new(1, "Widget", 5));
    }

    #[test]
    fn test_decode_accepts_any_field_order_and_whitespace() {
        let body = br#"
            { "quantity": -2, "itemName": "", "id": 2147483647 }
        "#;

        let order = decode_order(body).unwrap();

        assert_eq!(order, Order::new(i32::MAX, "", -2));
    }

    #[test]
    fn test_decode_not_json_reports_parser_message() {
        let err = decode_order(b"not json").unwrap_err();

        let OrderError::Decode(message) = err else {
            panic!("expected decode error, got {err:?}");
        };
        assert!(!message.is_empty());
        assert!(message.contains("line 1"));
    }

    #[test]
    fn test_decode_missing_item_name() {
        let err = decode_order(br#"{"id":1,"quantity":5}"#).unwrap_err();

        let OrderError::Decode(message) = err else {
            panic!("expected decode error, got {err:?}");
        };
        assert!(message.starts_with("missing field `itemName`"));
    }

    #[test]
    fn test_decode_rejects_mistyped_fields() {
        let bodies: [&[u8]; 6] = [
            br#"{"id":"1","itemName":"Widget","quantity":5}"#,
            br#"{"id":1,"itemName":"Widget","quantity":"five"}"#,
            br#"{"id":1.5,"itemName":"Widget","quantity":5}"#,
            br#"{"id":1,"itemName":null,"quantity":5}"#,
            br#"{"id":1,"itemName":7,"quantity":5}"#,
            br#"{"id":4294967296,"itemName":"Widget","quantity":5}"#,
        ];

        for body in bodies {
            let result = decode_order(body);
            assert!(
                matches!(result, Err(OrderError::Decode(ref m)) if !m.is_empty()),
                "expected decode failure for {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(matches!(decode_order(b""), Err(OrderError::Decode(_))));
    }

    #[test]
    fn test_encode_orders() {
        let orders = vec![Order::new(1, "Widget", 5), Order::new(2, "Gadget", 1)];

        let json = encode_orders(&orders).unwrap();

        assert_eq!(
            json,
            r#"[{"id":1,"itemName":"Widget","quantity":5},{"id":2,"itemName":"Gadget","quantity":1}]"#
        );
    }

    #[test]
    fn test_encode_empty_list() {
        assert_eq!(encode_orders(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_create_confirmation() {
        assert_eq!(create_confirmation(1), "Order ID: 1");
        assert_eq!(create_confirmation(-7), "Order ID: -7");
    }
}

//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `orders_core::storage`. The
//! service's own message is kept after the variant prefix.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use orders_core::storage::StoreError;

/// Map transport-level failures (no service response) to `ConnectionFailed`.
fn connection_failure<E, R>(err: &SdkError<E, R>) -> Option<StoreError>
where
    E: std::error::Error + 'static,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            StoreError::ConnectionFailed(DisplayErrorContext(err).to_string()),
        ),
        _ => None,
    }
}

/// `prefix: <service message>`, or just `prefix` when the service sent none.
///
/// The exception's own message wins; the response metadata is the fallback.
fn with_service_message(
    prefix: &str,
    message: Option<&str>,
    err: &impl ProvideErrorMetadata,
) -> String {
    match message.or_else(|| err.message()) {
        Some(message) if !message.is_empty() => format!("{}: {}", prefix, message),
        _ => prefix.to_string(),
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    id: i32,
) -> StoreError {
    if let Some(store_error) = connection_failure(&err) {
        return store_error;
    }

    let err = err.into_service_error();
    let (prefix, message) = match &err {
        PutItemError::ConditionalCheckFailedException(_) => {
            return StoreError::AlreadyExists { id }
        }
        PutItemError::ResourceNotFoundException(e) => ("Table not found", e.message()),
        PutItemError::ProvisionedThroughputExceededException(e) => {
            ("Throughput exceeded, please retry", e.message())
        }
        PutItemError::RequestLimitExceeded(e) => {
            ("Request limit exceeded, please retry", e.message())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(e) => {
            ("Item collection size limit exceeded", e.message())
        }
        PutItemError::TransactionConflictException(e) => {
            ("Transaction conflict, please retry", e.message())
        }
        PutItemError::InternalServerError(e) => ("DynamoDB internal server error", e.message()),
        err => {
            return StoreError::RequestFailed(format!(
                "PutItem failed: {}",
                DisplayErrorContext(err)
            ))
        }
    };

    StoreError::RequestFailed(with_service_message(prefix, message, &err))
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    if let Some(store_error) = connection_failure(&err) {
        return store_error;
    }

    let err = err.into_service_error();
    let (prefix, message) = match &err {
        ScanError::ResourceNotFoundException(e) => ("Table not found", e.message()),
        ScanError::ProvisionedThroughputExceededException(e) => {
            ("Throughput exceeded, please retry", e.message())
        }
        ScanError::RequestLimitExceeded(e) => {
            ("Request limit exceeded, please retry", e.message())
        }
        ScanError::InternalServerError(e) => ("DynamoDB internal server error", e.message()),
        err => {
            return StoreError::RequestFailed(format!(
                "Scan failed: {}",
                DisplayErrorContext(err)
            ))
        }
    };

    StoreError::RequestFailed(with_service_message(prefix, message, &err))
}

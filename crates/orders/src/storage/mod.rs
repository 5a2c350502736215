//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`OrderRepository`](orders_core::storage::OrderRepository) trait defined in
//! `orders_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled. It backs the test suite and the
//! `ORDERS_STORAGE=memory` mode for local runs.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p orders
//! ```
//!
//! Build without the AWS SDK:
//! ```bash
//! cargo build -p orders --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

pub use inmemory::InMemoryRepository;

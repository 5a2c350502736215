//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `OrderRepository`
//! that stores orders in a HashMap wrapped in `Arc<RwLock<_>>`. This is
//! useful for testing and development scenarios where persistence is not
//! required.
//!
//! # Example
//!
//! ```rust,ignore
//! use orders::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new().with_page_size(2);
//! // Scans now stop after two orders unless the scan mode is paginated.
//! ```

mod repository;

pub use repository::InMemoryRepository;

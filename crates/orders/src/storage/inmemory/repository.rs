//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use orders_core::order::Order;
use orders_core::storage::{OrderRepository, Result, ScanMode, StoreError, WritePolicy};

/// In-memory storage backend.
///
/// Mirrors the DynamoDB backend's observable behavior: the write policy
/// decides what happens on an id collision, and an optional page size
/// emulates the store's single-response scan limit.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    orders: Arc<RwLock<HashMap<i32, Order>>>,
    write_policy: WritePolicy,
    scan_mode: ScanMode,
    page_size: Option<usize>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            write_policy: WritePolicy::default(),
            scan_mode: ScanMode::default(),
            page_size: None,
        }
    }

    pub fn with_write_policy(mut self, write_policy: WritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }

    pub fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    /// Limits how many orders a single scan page returns.
    #[allow(dead_code)]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Number of stored orders.
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepository {
    async fn put_order(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        if self.write_policy == WritePolicy::RejectExisting && orders.contains_key(&order.id) {
            return Err(StoreError::AlreadyExists { id: order.id });
        }
        orders.insert(order.id, order.clone());
        Ok(())
    }

    async fn scan_orders(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        let all = orders.values().cloned();

        let scanned: Vec<Order> = match (self.scan_mode, self.page_size) {
            (ScanMode::SinglePage, Some(page_size)) => {
                if orders.len() > page_size {
                    tracing::warn!(
                        returned = page_size,
                        stored = orders.len(),
                        "Scan stopped after the first page; remaining orders were not read"
                    );
                }
                all.take(page_size).collect()
            }
            _ => all.collect(),
        };

        Ok(scanned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_scan() {
        let repo = InMemoryRepository::new();
        let order = Order::new(1, "Widget", 5);

        repo.put_order(&order).await.unwrap();

        assert_eq!(repo.scan_orders().await.unwrap(), vec![order]);
    }

    #[tokio::test]
    async fn test_scan_empty() {
        let repo = InMemoryRepository::new();

        assert!(repo.scan_orders().await.unwrap().is_empty());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_overwrite_keeps_last_write() {
        let repo = InMemoryRepository::new();

        repo.put_order(&Order::new(1, "Widget", 5)).await.unwrap();
        repo.put_order(&Order::new(1, "Gadget", 9)).await.unwrap();

        assert_eq!(
            repo.scan_orders().await.unwrap(),
            vec![Order::new(1, "Gadget", 9)]
        );
    }

    #[tokio::test]
    async fn test_reject_existing_keeps_first_write() {
        let repo = InMemoryRepository::new().with_write_policy(WritePolicy::RejectExisting);

        repo.put_order(&Order::new(1, "Widget", 5)).await.unwrap();
        let err = repo
            .put_order(&Order::new(1, "Gadget", 9))
            .await
            .unwrap_err();

        assert_eq!(err, StoreError::AlreadyExists { id: 1 });
        assert_eq!(
            repo.scan_orders().await.unwrap(),
            vec![Order::new(1, "Widget", 5)]
        );
    }

    #[tokio::test]
    async fn test_single_page_scan_truncates() {
        let repo = InMemoryRepository::new().with_page_size(2);
        for id in 0..5 {
            repo.put_order(&Order::new(id, "Widget", 1)).await.unwrap();
        }

        assert_eq!(repo.scan_orders().await.unwrap().len(), 2);
        assert_eq!(repo.len().await, 5);
    }

    #[tokio::test]
    async fn test_paginated_scan_reads_everything() {
        let repo = InMemoryRepository::new()
            .with_page_size(2)
            .with_scan_mode(ScanMode::Paginated);
        for id in 0..5 {
            repo.put_order(&Order::new(id, "Widget", 1)).await.unwrap();
        }

        let mut ids: Vec<i32> = repo
            .scan_orders()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        ids.sort();

        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let clone = repo.clone();

        repo.put_order(&Order::new(3, "Bolt", 100)).await.unwrap();

        assert_eq!(clone.len().await, 1);
    }
}

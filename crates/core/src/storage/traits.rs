use async_trait::async_trait;

use crate::order::Order;

use super::Result;

/// Repository for order persistence.
///
/// Implementations decide how a write treats an existing order with the same
/// id (see [`WritePolicy`](super::WritePolicy)) and whether a scan follows
/// continuation pages (see [`ScanMode`](super::ScanMode)).
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Writes a single order keyed by its id.
    async fn put_order(&self, order: &Order) -> Result<()>;

    /// Reads every order the store returns for a full-table scan.
    ///
    /// The result is fully materialized and carries no ordering guarantee.
    async fn scan_orders(&self) -> Result<Vec<Order>>;
}

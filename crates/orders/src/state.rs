//! Application state with repository-based storage.
//!
//! The order repository is built once at startup and injected here. Handlers
//! only see the `OrderRepository` trait object, so tests can swap in any
//! implementation.

use std::sync::Arc;

use orders_core::storage::OrderRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request handler. The repository is read-only after
/// construction and safe to use concurrently.
#[derive(Clone)]
pub struct AppState {
    pub order_repo: Arc<dyn OrderRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        Self { order_repo }
    }

    /// Builds the repository selected by `config`.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repo: Arc<dyn OrderRepository> = match config.storage {
            StorageBackend::Memory => Arc::new(
                InMemoryRepository::new()
                    .with_write_policy(config.write_policy)
                    .with_scan_mode(config.scan_mode),
            ),
            StorageBackend::DynamoDb => dynamodb_repository(config).await?,
        };

        Ok(Self::new(repo))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}

#[cfg(feature = "dynamodb")]
async fn dynamodb_repository(config: &Config) -> anyhow::Result<Arc<dyn OrderRepository>> {
    use crate::config::ConfigError;
    use crate::storage::dynamodb::{AwsConfig, DynamoDbRepository};

    let table_name = config
        .table_name
        .clone()
        .ok_or(ConfigError::Missing("ORDERS_TABLE"))?;

    let aws = AwsConfig {
        endpoint_url: config.endpoint_url.clone(),
        region: config.region.clone(),
    };

    let repo = DynamoDbRepository::connect(&aws, table_name)
        .await
        .with_write_policy(config.write_policy)
        .with_scan_mode(config.scan_mode);

    tracing::info!(
        target_store = %aws.target_display(),
        table = %repo.table_name(),
        "DynamoDB client ready"
    );

    Ok(Arc::new(repo))
}

#[cfg(not(feature = "dynamodb"))]
async fn dynamodb_repository(_config: &Config) -> anyhow::Result<Arc<dyn OrderRepository>> {
    anyhow::bail!(
        "DynamoDB storage requested but the `dynamodb` feature is disabled. \
        Rebuild with `--features dynamodb` or set ORDERS_STORAGE=memory"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use orders_core::order::Order;
    use orders_core::storage::{ScanMode, StoreError, WritePolicy};

    fn memory_config(write_policy: WritePolicy) -> Config {
        Config {
            storage: StorageBackend::Memory,
            table_name: None,
            write_policy,
            scan_mode: ScanMode::SinglePage,
            endpoint_url: None,
            region: None,
        }
    }

    #[tokio::test]
    async fn test_memory_backend_honours_write_policy() {
        let state = AppState::from_config(&memory_config(WritePolicy::RejectExisting))
            .await
            .unwrap();
        let order = Order::new(1, "Widget", 5);

        state.order_repo.put_order(&order).await.unwrap();
        let err = state.order_repo.put_order(&order).await.unwrap_err();

        assert_eq!(err, StoreError::AlreadyExists { id: 1 });
    }

    #[tokio::test]
    async fn test_dynamodb_backend_without_table_fails_before_connecting() {
        let config = Config {
            storage: StorageBackend::DynamoDb,
            ..memory_config(WritePolicy::Overwrite)
        };

        assert!(AppState::from_config(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_repository() {
        let state = AppState::default();
        let clone = state.clone();

        state
            .order_repo
            .put_order(&Order::new(2, "Gadget", 1))
            .await
            .unwrap();

        assert_eq!(clone.order_repo.scan_orders().await.unwrap().len(), 1);
    }
}

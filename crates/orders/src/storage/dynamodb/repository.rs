//! DynamoDB repository implementation.
//!
//! Implements `OrderRepository` from `orders_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use orders_core::order::Order;
use orders_core::storage::{OrderRepository, Result, ScanMode, WritePolicy};

use super::client::{create_client, AwsConfig};
use super::conversions::{item_to_order, order_to_item, ATTR_ID};
use super::error::{map_put_item_error, map_scan_error};

/// What a scan does after reading one page.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanStep {
    /// Request the next page starting at this key.
    Continue(HashMap<String, AttributeValue>),
    /// More pages exist but the scan mode reads only one.
    Truncated,
    /// The table is exhausted.
    Done,
}

/// Decides the next scan step from the page's `LastEvaluatedKey`.
///
/// An empty key map means the same as no key: nothing is left to read.
pub fn next_scan_step(
    scan_mode: ScanMode,
    last_evaluated_key: Option<HashMap<String, AttributeValue>>,
) -> ScanStep {
    match (scan_mode, last_evaluated_key.filter(|key| !key.is_empty())) {
        (ScanMode::Paginated, Some(key)) => ScanStep::Continue(key),
        (ScanMode::SinglePage, Some(_)) => ScanStep::Truncated,
        (_, None) => ScanStep::Done,
    }
}

/// DynamoDB-based repository implementation.
///
/// Orders live in a single table keyed by the numeric `id` attribute.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    write_policy: WritePolicy,
    scan_mode: ScanMode,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    ///
    /// Writes overwrite and scans read a single page until configured otherwise.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            write_policy: WritePolicy::default(),
            scan_mode: ScanMode::default(),
        }
    }

    /// Creates a new repository, building the SDK client from `aws`.
    pub async fn connect(aws: &AwsConfig, table_name: impl Into<String>) -> Self {
        let client = create_client(aws).await;
        Self::new(client, table_name)
    }

    pub fn with_write_policy(mut self, write_policy: WritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }

    pub fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl OrderRepository for DynamoDbRepository {
    async fn put_order(&self, order: &Order) -> Result<()> {
        let item = order_to_item(order);

        let mut request = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item));

        if self.write_policy == WritePolicy::RejectExisting {
            request = request.condition_expression(format!("attribute_not_exists({ATTR_ID})"));
        }

        request
            .send()
            .await
            .map_err(|e| map_put_item_error(e, order.id))?;

        Ok(())
    }

    async fn scan_orders(&self) -> Result<Vec<Order>> {
        let mut orders = Vec::new();
        let mut start_key = None;
        let mut pages = 0usize;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;
            pages += 1;

            for item in result.items.unwrap_or_default() {
                orders.push(item_to_order(&item)?);
            }

            match next_scan_step(self.scan_mode, result.last_evaluated_key) {
                ScanStep::Continue(key) => start_key = Some(key),
                ScanStep::Truncated => {
                    tracing::warn!(
                        table = %self.table_name,
                        returned = orders.len(),
                        "Scan stopped after the first page; remaining orders were not read"
                    );
                    break;
                }
                ScanStep::Done => break,
            }
        }

        tracing::debug!(table = %self.table_name, pages, count = orders.len(), "Scanned orders");

        Ok(orders)
    }
}

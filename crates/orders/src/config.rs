use std::{env, fmt, str::FromStr};

use orders_core::storage::{ScanMode, UnknownVariant, WritePolicy};
use thiserror::Error;

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("{var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: UnknownVariant,
    },
}

/// Which order store the server talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    DynamoDb,
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::DynamoDb => f.write_str("dynamodb"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(StorageBackend::DynamoDb),
            "memory" | "inmemory" => Ok(StorageBackend::Memory),
            _ => Err(UnknownVariant {
                kind: "storage backend",
                value: s.to_string(),
                expected: "dynamodb, memory",
            }),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Storage backend (default: dynamodb)
    pub storage: StorageBackend,
    /// Target table name. Required for the DynamoDB backend, unused otherwise.
    pub table_name: Option<String>,
    /// Behavior on id collision (default: overwrite)
    pub write_policy: WritePolicy,
    /// Scan pagination behavior (default: single-page)
    pub scan_mode: ScanMode,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local.
    pub endpoint_url: Option<String>,
    /// AWS region override.
    pub region: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ORDERS_TABLE` - Table name (required for dynamodb)
    /// - `ORDERS_STORAGE` - `dynamodb` or `memory` (default: dynamodb)
    /// - `ORDERS_WRITE_POLICY` - `overwrite` or `reject-existing` (default: overwrite)
    /// - `ORDERS_SCAN_MODE` - `single-page` or `paginated` (default: single-page)
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `AWS_REGION` - AWS region (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let storage: StorageBackend =
            parse_or_default(var("ORDERS_STORAGE"), "ORDERS_STORAGE")?;
        let write_policy: WritePolicy =
            parse_or_default(var("ORDERS_WRITE_POLICY"), "ORDERS_WRITE_POLICY")?;
        let scan_mode: ScanMode =
            parse_or_default(var("ORDERS_SCAN_MODE"), "ORDERS_SCAN_MODE")?;

        let table_name = var("ORDERS_TABLE");
        if storage == StorageBackend::DynamoDb && table_name.is_none() {
            return Err(ConfigError::Missing("ORDERS_TABLE"));
        }

        Ok(Self {
            storage,
            table_name,
            write_policy,
            scan_mode,
            endpoint_url: var("AWS_ENDPOINT_URL"),
            region: var("AWS_REGION"),
        })
    }
}

fn parse_or_default<T>(value: Option<String>, var: &'static str) -> Result<T, ConfigError>
where
    T: FromStr<Err = UnknownVariant> + Default,
{
    value
        .map(|v| v.parse().map_err(|source| ConfigError::Invalid { var, source }))
        .transpose()
        .map(Option::unwrap_or_default)
}

//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;

/// AWS client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region. Falls back to the SDK's default provider chain when unset.
    pub region: Option<String>,
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match (&self.endpoint_url, &self.region) {
            (Some(url), _) => format!("Local DynamoDB ({})", url),
            (None, Some(region)) => format!("AWS DynamoDB (region: {})", region),
            (None, None) => "AWS DynamoDB (default region)".to_string(),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
///
/// Built once at startup; the client is cheap to clone and safe to share
/// across concurrent requests.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = &config.region {
        sdk_config_loader = sdk_config_loader.region(aws_config::Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

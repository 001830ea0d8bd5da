//! Session configuration: which region and model the extraction
//! collaborator runs against.

use serde::{Deserialize, Serialize};

/// Settings a caller supplies once per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// AWS region for the Bedrock calls.
    pub region: String,
    /// Converse model ID (an inference profile, e.g.
    /// `us.anthropic.claude-sonnet-4-5-20250929-v1:0`).
    pub model_id: String,
}

impl RegistryConfig {
    /// Resolve the AWS SDK config for this session using the default
    /// credential chain.
    pub async fn sdk_config(&self) -> aws_config::SdkConfig {
        aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(self.region.clone()))
            .load()
            .await
    }
}

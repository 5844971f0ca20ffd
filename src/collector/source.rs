use async_trait::async_trait;
use crate::errors::RepowatchError;
use crate::models::VulnerabilityRecord;

/// Where the collector gets vulnerability data for a repository.
#[async_trait]
pub trait VulnerabilitySource: Send + Sync {
    async fn fetch(&self, owner: &str, name: &str) -> Result<Vec<VulnerabilityRecord>, RepowatchError>;
    fn name(&self) -> &str;
}

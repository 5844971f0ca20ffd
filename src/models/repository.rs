use serde::{Deserialize, Serialize};

/// Response-time limit applied to endpoints that do not configure their own.
pub const DEFAULT_ALERT_THRESHOLD_MS: u64 = 1000;

/// Top-level shape of `repositories.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoriesFile {
    #[serde(default)]
    pub repositories: Vec<RepositoryRef>,
}

/// A repository to scan, as listed in the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
    /// API endpoints watched by the performance monitor.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<EndpointConfig>,
    /// Cloud resources priced by the cost analyzer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cloud_resources: Vec<CloudResource>,
}

impl RepositoryRef {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            endpoints: Vec::new(),
            cloud_resources: Vec::new(),
        }
    }

    /// `owner/name`, the key used in every report.
    pub fn display_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_threshold_ms: Option<u64>,
}

impl EndpointConfig {
    pub fn threshold_ms(&self) -> u64 {
        self.alert_threshold_ms.unwrap_or(DEFAULT_ALERT_THRESHOLD_MS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudResource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
}

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use crate::errors::RepowatchError;
use crate::models::{CvssScore, VulnerabilityRecord};
use super::source::VulnerabilitySource;
use tracing::debug;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Reads open Dependabot alerts through the GitHub REST API.
pub struct GithubAlertsSource {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl GithubAlertsSource {
    /// With no token the Authorization header is left off; a bad one shows
    /// up as an upstream error on the first request.
    pub fn new(token: Option<String>, base_url: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            token,
            base_url: base_url
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    pub fn alerts_url(&self, owner: &str, name: &str) -> String {
        format!("{}/repos/{}/{}/dependabot/alerts", self.base_url, owner, name)
    }

    fn alerts_request(&self, owner: &str, name: &str) -> RequestBuilder {
        let mut request = self.client
            .get(self.alerts_url(owner, name))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, concat!("repowatch/", env!("CARGO_PKG_VERSION")));
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }
        request
    }
}

#[async_trait]
impl VulnerabilitySource for GithubAlertsSource {
    async fn fetch(&self, owner: &str, name: &str) -> Result<Vec<VulnerabilityRecord>, RepowatchError> {
        debug!(url = %self.alerts_url(owner, name), "Requesting vulnerability alerts");

        let resp = self.alerts_request(owner, name).send().await
            .map_err(|e| RepowatchError::Network(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(RepowatchError::Upstream { status: status.as_u16() });
        }

        let alerts: Vec<Value> = resp.json().await
            .map_err(|e| RepowatchError::Network(format!("Invalid alerts payload: {}", e)))?;

        Ok(alerts.iter().map(record_from_alert).collect())
    }

    fn name(&self) -> &str {
        "github"
    }
}

/// Map one Dependabot alert object onto a record. Fields the alert does not
/// carry stay empty.
pub fn record_from_alert(alert: &Value) -> VulnerabilityRecord {
    let advisory = &alert["security_advisory"];
    let package = alert["dependency"]["package"]["name"]
        .as_str()
        .or_else(|| alert["security_vulnerability"]["package"]["name"].as_str());

    let cvss_score = match &advisory["cvss"]["score"] {
        Value::Number(n) => Some(CvssScore::Number(n.clone())),
        Value::String(s) => Some(CvssScore::Text(s.clone())),
        _ => None,
    };

    VulnerabilityRecord {
        package: package.map(str::to_string),
        severity: advisory["severity"].as_str().map(str::to_string),
        description: advisory["summary"].as_str().map(str::to_string),
        cvss_score,
    }
}

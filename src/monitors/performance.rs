use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::Serialize;
use crate::models::RepositoryRef;

/// Upper bound (exclusive) of a simulated response time.
const MAX_RESPONSE_TIME_MS: u64 = 2000;
const ERROR_PROBABILITY: f64 = 0.2;

/// One simulated request against a configured endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointCheck {
    pub repository: String,
    pub endpoint: String,
    pub url: String,
    pub status: u16,
    pub response_time_ms: u64,
    pub timestamp: String,
    pub threshold_ms: u64,
    pub is_over_threshold: bool,
}

impl EndpointCheck {
    pub fn is_error(&self) -> bool {
        self.status != 200
    }

    pub fn has_problem(&self) -> bool {
        self.is_error() || self.is_over_threshold
    }
}

/// Simulate one check per endpoint, walking repositories and their endpoints
/// in configuration order.
pub fn simulate_api_calls<R: Rng>(
    repositories: &[RepositoryRef],
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<EndpointCheck> {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let mut results = Vec::new();

    for repo in repositories {
        for endpoint in &repo.endpoints {
            let response_time_ms = rng.gen_range(0..MAX_RESPONSE_TIME_MS);
            let is_error = rng.gen_bool(ERROR_PROBABILITY);
            let threshold_ms = endpoint.threshold_ms();

            results.push(EndpointCheck {
                repository: repo.display_name(),
                endpoint: endpoint.name.clone(),
                url: endpoint.url.clone(),
                status: if is_error { 500 } else { 200 },
                response_time_ms,
                timestamp: timestamp.clone(),
                threshold_ms,
                is_over_threshold: response_time_ms > threshold_ms,
            });
        }
    }

    results
}

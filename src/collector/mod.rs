//! Collects vulnerability data for every configured repository and writes
//! the aggregate artifact the reporter reads.

pub mod source;
pub mod simulated;
pub mod github;

use std::path::Path;
use crate::config::credentials::resolve_token;
use crate::config::{RepowatchConfig, SourceKind};
use crate::errors::RepowatchError;
use crate::models::{now_local, AggregateReport, RepositoryRef, ScanReportEntry, ScanResult};
use tracing::{info, warn};

pub use source::VulnerabilitySource;
pub use simulated::SimulatedSource;
pub use github::GithubAlertsSource;

pub struct Collector {
    source: Box<dyn VulnerabilitySource>,
}

impl Collector {
    pub fn new(source: Box<dyn VulnerabilitySource>) -> Self {
        Self { source }
    }

    /// Build the collector the settings ask for. The GitHub token is resolved
    /// here and handed to the source; nothing downstream reads the environment.
    pub fn from_config(config: &RepowatchConfig) -> Self {
        let source: Box<dyn VulnerabilitySource> = match config.source_kind() {
            SourceKind::Simulated => Box::new(SimulatedSource),
            SourceKind::Github => {
                let token = resolve_token(config.token_ref());
                Box::new(GithubAlertsSource::new(token, config.api_base_url()))
            }
        };
        Self::new(source)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Check one repository. Source failures come back as an `error` result,
    /// never as an `Err`.
    pub async fn check_repository_vulnerabilities(&self, owner: &str, name: &str) -> ScanResult {
        match self.source.fetch(owner, name).await {
            Ok(details) => ScanResult::success(details),
            Err(e) => {
                warn!(repository = %format!("{}/{}", owner, name), error = %e, "Vulnerability check failed");
                ScanResult::error(scan_error_message(&e))
            }
        }
    }

    /// Check each repository in order and wrap the entries in a report.
    pub async fn collect(&self, repositories: &[RepositoryRef]) -> AggregateReport {
        let mut results = Vec::with_capacity(repositories.len());
        for repo in repositories {
            let repository = repo.display_name();
            info!(repository = %repository, source = self.source.name(), "Scanning repository");
            let result = self.check_repository_vulnerabilities(&repo.owner, &repo.name).await;
            results.push(ScanReportEntry {
                repository,
                scan_time: now_local(),
                result,
            });
        }

        AggregateReport {
            generated_at: now_local(),
            results,
        }
    }

    /// Load repositories, scan them, and overwrite `output_path` with the
    /// aggregate report. Only the final write can fail the run.
    pub async fn generate_vulnerability_report(
        &self,
        repositories_path: &Path,
        output_path: &Path,
    ) -> Result<AggregateReport, RepowatchError> {
        let repositories = crate::config::load_repositories(repositories_path).await.into_inner();
        let report = self.collect(&repositories).await;
        write_aggregate_report(&report, output_path).await?;
        info!(
            path = %output_path.display(),
            repositories = report.results.len(),
            "Vulnerability report written"
        );
        Ok(report)
    }
}

/// Message stored in an `error` scan result.
fn scan_error_message(err: &RepowatchError) -> String {
    match err {
        RepowatchError::Upstream { status } => {
            format!("Falha ao buscar vulnerabilidades: {}", status)
        }
        RepowatchError::Network(msg) => msg.clone(),
        other => other.to_string(),
    }
}

pub async fn write_aggregate_report(report: &AggregateReport, path: &Path) -> Result<(), RepowatchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

use std::path::Path;
use chrono::Utc;
use crate::errors::RepowatchError;
use crate::models::{now_local, AggregateReport};
use crate::monitors::{CostAnalysis, EndpointCheck};
use super::cost::format_cost_report;
use super::formatter::format_security_report;
use super::performance::format_performance_report;
use tracing::info;

/// Render the security summary stamped with the current time, overwrite
/// `output_path` with it, and return the text.
pub async fn generate_markdown_report(
    report: &AggregateReport,
    output_path: &Path,
) -> Result<String, RepowatchError> {
    let markdown = format_security_report(report, &now_local());
    write_document(output_path, &markdown).await?;
    info!(path = %output_path.display(), repositories = report.results.len(), "Security report rendered");
    Ok(markdown)
}

pub async fn generate_performance_report(
    checks: &[EndpointCheck],
    output_path: &Path,
) -> Result<String, RepowatchError> {
    let markdown = format_performance_report(checks, &Utc::now());
    write_document(output_path, &markdown).await?;
    info!(path = %output_path.display(), endpoints = checks.len(), "Performance report rendered");
    Ok(markdown)
}

pub async fn generate_cost_report(
    analysis: &CostAnalysis,
    output_path: &Path,
) -> Result<String, RepowatchError> {
    let markdown = format_cost_report(analysis, &Utc::now());
    write_document(output_path, &markdown).await?;
    info!(path = %output_path.display(), resources = analysis.resources.len(), "Cost report rendered");
    Ok(markdown)
}

async fn write_document(path: &Path, content: &str) -> Result<(), RepowatchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, content).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("security-report.md");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale content that must disappear").unwrap();

        let markdown = generate_markdown_report(&AggregateReport::empty(now_local()), &path).await.unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, markdown);
        assert!(!on_disk.contains("stale"));
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the output file cannot be written.
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();
        let result = generate_markdown_report(&AggregateReport::empty(now_local()), &path).await;
        assert!(matches!(result, Err(RepowatchError::Io(_))));
    }
}

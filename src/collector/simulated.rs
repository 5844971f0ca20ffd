use async_trait::async_trait;
use crate::errors::RepowatchError;
use crate::models::{CvssScore, VulnerabilityRecord};
use super::source::VulnerabilitySource;

/// Returns the same two findings for every repository. This is the default
/// source and what the pipeline reports unless GitHub polling is enabled.
pub struct SimulatedSource;

pub fn simulated_vulnerabilities() -> Vec<VulnerabilityRecord> {
    vec![
        VulnerabilityRecord::new(
            "example-package",
            "high",
            "Vulnerabilidade de execução de código remoto",
            CvssScore::Text("8.9".to_string()),
        ),
        VulnerabilityRecord::new(
            "another-library",
            "medium",
            "Risco de exposição de informações",
            CvssScore::Text("5.4".to_string()),
        ),
    ]
}

#[async_trait]
impl VulnerabilitySource for SimulatedSource {
    async fn fetch(&self, _owner: &str, _name: &str) -> Result<Vec<VulnerabilityRecord>, RepowatchError> {
        Ok(simulated_vulnerabilities())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_records() {
        let records = SimulatedSource.fetch("a", "b").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].package.as_deref(), Some("example-package"));
        assert_eq!(records[0].severity.as_deref(), Some("high"));
        assert_eq!(records[1].package.as_deref(), Some("another-library"));
        assert_eq!(records[1].cvss_score, Some(CvssScore::Text("5.4".to_string())));
    }
}

use std::path::Path;
use crate::errors::RepowatchError;
use crate::models::{now_local, AggregateReport, Loaded};
use tracing::warn;

pub async fn read_security_report(path: &Path) -> Result<AggregateReport, RepowatchError> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

/// Read the collector's artifact, or an empty report stamped with the
/// current time when it is missing or unreadable.
pub async fn load_security_report(path: &Path) -> Loaded<AggregateReport> {
    match read_security_report(path).await {
        Ok(report) => Loaded::Read(report),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load security report, rendering an empty one");
            Loaded::Defaulted {
                value: AggregateReport::empty(now_local()),
                reason: e.to_string(),
            }
        }
    }
}

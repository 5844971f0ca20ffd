use std::path::Path;
use crate::errors::RepowatchError;
use crate::models::{Loaded, RepositoriesFile, RepositoryRef};
use tracing::{info, warn};

/// Read the repository list, failing on a missing or malformed file.
pub async fn parse_repositories(path: &Path) -> Result<Vec<RepositoryRef>, RepowatchError> {
    let content = tokio::fs::read_to_string(path).await?;
    let file: RepositoriesFile = serde_json::from_str(&content)?;
    Ok(file.repositories)
}

/// Read the repository list. Any failure is logged and yields an empty list
/// so the run can go on.
pub async fn load_repositories(path: &Path) -> Loaded<Vec<RepositoryRef>> {
    info!(path = %path.display(), "Loading repository configuration");
    match parse_repositories(path).await {
        Ok(repositories) => Loaded::Read(repositories),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load repositories, continuing with none");
            Loaded::Defaulted { value: Vec::new(), reason: e.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repositories.json");
        std::fs::write(
            &path,
            r#"{"repositories":[{"owner":"z","name":"last"},{"owner":"a","name":"first"},{"owner":"m","name":"mid"}]}"#,
        )
        .unwrap();

        let loaded = load_repositories(&path).await;
        assert!(!loaded.is_defaulted());
        let names: Vec<String> = loaded.value().iter().map(|r| r.display_name()).collect();
        assert_eq!(names, vec!["z/last", "a/first", "m/mid"]);
    }

    #[test]
    fn test_sample_configuration_parses() {
        let file: RepositoriesFile = serde_json::from_str(include_str!("../../repositories.json")).unwrap();
        assert_eq!(file.repositories.len(), 2);
        assert_eq!(file.repositories[0].endpoints.len(), 2);
        assert_eq!(file.repositories[1].cloud_resources[0].resource_type, "S3");
    }

    #[tokio::test]
    async fn test_missing_file_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_repositories(&dir.path().join("absent.json")).await;
        assert!(loaded.is_defaulted());
        assert!(loaded.value().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repositories.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(parse_repositories(&path).await, Err(RepowatchError::Json(_))));

        let loaded = load_repositories(&path).await;
        assert!(loaded.is_defaulted());
        assert!(loaded.into_inner().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repositories.json");
        std::fs::write(&path, r#"{"repositories":[{"owner":"only-owner"}]}"#).unwrap();
        assert!(load_repositories(&path).await.is_defaulted());
    }
}

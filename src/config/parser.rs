use std::collections::HashSet;
use std::path::Path;
use crate::errors::RepowatchError;
use super::types::{RepowatchConfig, DEFAULT_CONFIG_FILE};
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

/// Load settings from an explicit path, or from `repowatch.yaml` when it
/// exists, or fall back to defaults.
pub async fn load_config(explicit: Option<&Path>) -> Result<RepowatchConfig, RepowatchError> {
    match explicit {
        Some(path) => parse_config(path).await,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                parse_config(default_path).await
            } else {
                debug!("No settings file found, using defaults");
                Ok(RepowatchConfig::default())
            }
        }
    }
}

pub async fn parse_config(path: &Path) -> Result<RepowatchConfig, RepowatchError> {
    if !path.exists() {
        return Err(RepowatchError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(RepowatchError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<RepowatchConfig, RepowatchError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // An empty file parses to null; treat it as "all defaults".
    if yaml.is_null() {
        return Ok(RepowatchConfig::default());
    }

    validate_schema(&yaml)?;

    let config: RepowatchConfig = serde_yaml::from_value(yaml)?;

    validate_conflicts(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), RepowatchError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| RepowatchError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| RepowatchError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only: serde decides what actually fails.
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Every output artifact needs its own file, otherwise one run clobbers
/// another's output.
fn validate_conflicts(config: &RepowatchConfig) -> Result<(), RepowatchError> {
    let output = config.output.clone().unwrap_or_default();
    let mut seen = HashSet::new();
    for name in output.file_names() {
        if !seen.insert(name) {
            return Err(RepowatchError::Config(format!(
                "Output file '{}' is configured for more than one report",
                name
            )));
        }
    }

    if let Some(url) = config.api_base_url() {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RepowatchError::Config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                url
            )));
        }
    }

    Ok(())
}

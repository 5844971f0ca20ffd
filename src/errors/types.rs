use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepowatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned HTTP {status}")]
    Upstream { status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RepowatchError {
    /// Process exit code used by the CLI when this error ends a run.
    pub fn exit_code(&self) -> i32 {
        match self {
            RepowatchError::Config(_) | RepowatchError::Yaml(_) => 2,
            RepowatchError::Io(_) => 3,
            _ => 1,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "repowatch.yaml";
pub const DEFAULT_REPOSITORIES_FILE: &str = "repositories.json";
pub const DEFAULT_SECURITY_JSON: &str = "security-report.json";
pub const DEFAULT_SECURITY_MARKDOWN: &str = "security-report.md";
pub const DEFAULT_PERFORMANCE_MARKDOWN: &str = "performance-report.md";
pub const DEFAULT_COST_MARKDOWN: &str = "cost-report.md";
pub const DEFAULT_TOKEN_REF: &str = "$GITHUB_TOKEN";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RepowatchConfig {
    pub repositories_file: Option<String>,
    pub source: Option<SourceConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SourceConfig {
    pub kind: Option<SourceKind>,
    pub api_base_url: Option<String>,
    /// Literal token, or `$VAR` to read it from the environment.
    pub token: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Simulated,
    Github,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simulated => "simulated",
            Self::Github => "github",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub security_json: Option<String>,
    pub security_markdown: Option<String>,
    pub performance_markdown: Option<String>,
    pub cost_markdown: Option<String>,
}

impl OutputConfig {
    /// File names of every output artifact, defaults filled in.
    pub fn file_names(&self) -> [&str; 4] {
        [
            self.security_json.as_deref().unwrap_or(DEFAULT_SECURITY_JSON),
            self.security_markdown.as_deref().unwrap_or(DEFAULT_SECURITY_MARKDOWN),
            self.performance_markdown.as_deref().unwrap_or(DEFAULT_PERFORMANCE_MARKDOWN),
            self.cost_markdown.as_deref().unwrap_or(DEFAULT_COST_MARKDOWN),
        ]
    }
}

impl RepowatchConfig {
    pub fn repositories_path(&self) -> PathBuf {
        PathBuf::from(self.repositories_file.as_deref().unwrap_or(DEFAULT_REPOSITORIES_FILE))
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source.as_ref().and_then(|s| s.kind).unwrap_or_default()
    }

    pub fn api_base_url(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.api_base_url.as_deref())
    }

    /// The unresolved token reference; `$GITHUB_TOKEN` when unset.
    pub fn token_ref(&self) -> &str {
        self.source
            .as_ref()
            .and_then(|s| s.token.as_deref())
            .unwrap_or(DEFAULT_TOKEN_REF)
    }

    fn output_path(&self, pick: impl Fn(&OutputConfig) -> Option<&str>, default: &str) -> PathBuf {
        let fallback = OutputConfig::default();
        let output = self.output.as_ref().unwrap_or(&fallback);
        let dir = PathBuf::from(output.directory.as_deref().unwrap_or("."));
        dir.join(pick(output).unwrap_or(default))
    }

    pub fn security_json_path(&self) -> PathBuf {
        self.output_path(|o| o.security_json.as_deref(), DEFAULT_SECURITY_JSON)
    }

    pub fn security_markdown_path(&self) -> PathBuf {
        self.output_path(|o| o.security_markdown.as_deref(), DEFAULT_SECURITY_MARKDOWN)
    }

    pub fn performance_markdown_path(&self) -> PathBuf {
        self.output_path(|o| o.performance_markdown.as_deref(), DEFAULT_PERFORMANCE_MARKDOWN)
    }

    pub fn cost_markdown_path(&self) -> PathBuf {
        self.output_path(|o| o.cost_markdown.as_deref(), DEFAULT_COST_MARKDOWN)
    }
}

use clap::{Parser, Subcommand, Args};
use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "repowatch", version, about = "Vulnerability, API performance and cloud cost reports for your repositories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML settings file (defaults to ./repowatch.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan configured repositories and write the vulnerability data
    Collect(CollectArgs),
    /// Render the vulnerability data into a Markdown summary
    Report(ReportArgs),
    /// Collect, then report
    Scan(ScanArgs),
    /// Simulate API endpoint checks and write a performance report
    Perf(MonitorArgs),
    /// Simulate cloud spend and write a cost report
    Cost(MonitorArgs),
    /// Validate a settings file
    Validate(ValidateArgs),
}

#[derive(Args, Clone, Default)]
pub struct CollectArgs {
    /// Repository list (JSON)
    #[arg(short, long)]
    pub repositories: Option<String>,

    /// Where to write the vulnerability data (JSON)
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone, Default)]
pub struct ReportArgs {
    /// Vulnerability data produced by `collect`
    #[arg(short, long)]
    pub input: Option<String>,

    /// Where to write the Markdown report
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone, Default)]
pub struct ScanArgs {
    /// Repository list (JSON)
    #[arg(short, long)]
    pub repositories: Option<String>,

    /// Intermediate vulnerability data (JSON)
    #[arg(long)]
    pub json: Option<String>,

    /// Where to write the Markdown report
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone, Default)]
pub struct MonitorArgs {
    /// Repository list (JSON)
    #[arg(short, long)]
    pub repositories: Option<String>,

    /// Where to write the Markdown report
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone, Default)]
pub struct ValidateArgs {
    /// Settings file to validate (defaults to --config, then ./repowatch.yaml)
    pub path: Option<String>,
}

impl ValidateArgs {
    /// File to validate: the positional path, else the global `--config`.
    pub fn target(&self, global_config: Option<&str>) -> String {
        self.path
            .as_deref()
            .or(global_config)
            .unwrap_or(DEFAULT_CONFIG_FILE)
            .to_string()
    }
}

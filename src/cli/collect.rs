use std::path::PathBuf;
use crate::cli::commands::CollectArgs;
use crate::collector::Collector;
use crate::config::RepowatchConfig;
use crate::errors::RepowatchError;
use tracing::info;

pub async fn handle_collect(args: CollectArgs, config: &RepowatchConfig) -> Result<(), RepowatchError> {
    let repositories = args.repositories.map(PathBuf::from).unwrap_or_else(|| config.repositories_path());
    let output = args.output.map(PathBuf::from).unwrap_or_else(|| config.security_json_path());

    info!("Starting security analysis");
    let collector = Collector::from_config(config);
    let report = collector.generate_vulnerability_report(&repositories, &output).await?;
    info!(
        repositories = report.results.len(),
        total_vulnerabilities = report.total_vulnerabilities(),
        "Analysis complete"
    );
    Ok(())
}

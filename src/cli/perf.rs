use std::path::PathBuf;
use chrono::Utc;
use crate::cli::commands::MonitorArgs;
use crate::config::{load_repositories, RepowatchConfig};
use crate::errors::RepowatchError;
use crate::monitors::simulate_api_calls;
use crate::reporting::generate_performance_report;
use tracing::info;

pub async fn handle_perf(args: MonitorArgs, config: &RepowatchConfig) -> Result<(), RepowatchError> {
    let repositories_path = args.repositories.map(PathBuf::from).unwrap_or_else(|| config.repositories_path());
    let output = args.output.map(PathBuf::from).unwrap_or_else(|| config.performance_markdown_path());

    info!("Starting API performance monitoring");
    let repositories = load_repositories(&repositories_path).await.into_inner();
    let checks = {
        let mut rng = rand::thread_rng();
        simulate_api_calls(&repositories, &mut rng, Utc::now())
    };
    generate_performance_report(&checks, &output).await?;
    info!(endpoints = checks.len(), "Monitoring complete");
    Ok(())
}

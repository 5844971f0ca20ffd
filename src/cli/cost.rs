use std::path::PathBuf;
use chrono::Utc;
use crate::cli::commands::MonitorArgs;
use crate::config::{load_repositories, RepowatchConfig};
use crate::errors::RepowatchError;
use crate::monitors::simulate_cloud_costs;
use crate::reporting::generate_cost_report;
use tracing::info;

pub async fn handle_cost(args: MonitorArgs, config: &RepowatchConfig) -> Result<(), RepowatchError> {
    let repositories_path = args.repositories.map(PathBuf::from).unwrap_or_else(|| config.repositories_path());
    let output = args.output.map(PathBuf::from).unwrap_or_else(|| config.cost_markdown_path());

    info!("Starting cloud cost analysis");
    let repositories = load_repositories(&repositories_path).await.into_inner();
    let analysis = {
        let mut rng = rand::thread_rng();
        simulate_cloud_costs(&repositories, &mut rng, Utc::now().date_naive())
    };
    generate_cost_report(&analysis, &output).await?;
    info!(
        resources = analysis.resources.len(),
        total_cost = analysis.total_cost,
        "Cost analysis complete"
    );
    Ok(())
}

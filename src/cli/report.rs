use std::path::PathBuf;
use crate::cli::commands::ReportArgs;
use crate::config::RepowatchConfig;
use crate::errors::RepowatchError;
use crate::reporting::{generate_markdown_report, load_security_report};
use tracing::info;

pub async fn handle_report(args: ReportArgs, config: &RepowatchConfig) -> Result<(), RepowatchError> {
    let input = args.input.map(PathBuf::from).unwrap_or_else(|| config.security_json_path());
    let output = args.output.map(PathBuf::from).unwrap_or_else(|| config.security_markdown_path());

    info!("Generating formatted report");
    let report = load_security_report(&input).await.into_inner();
    generate_markdown_report(&report, &output).await?;
    info!(path = %output.display(), "Report generated");
    Ok(())
}

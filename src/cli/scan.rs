use crate::cli::commands::{CollectArgs, ReportArgs, ScanArgs};
use crate::config::RepowatchConfig;
use crate::errors::RepowatchError;

/// Both pipeline stages back to back. They still talk only through the
/// intermediate file.
pub async fn handle_scan(args: ScanArgs, config: &RepowatchConfig) -> Result<(), RepowatchError> {
    super::collect::handle_collect(
        CollectArgs { repositories: args.repositories, output: args.json.clone() },
        config,
    )
    .await?;
    super::report::handle_report(ReportArgs { input: args.json, output: args.output }, config).await
}

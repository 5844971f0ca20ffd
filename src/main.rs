use std::path::Path;

use clap::Parser;
use repowatch::cli::{self, Commands};
use repowatch::config;
use repowatch::errors::RepowatchError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: cli::Cli) -> Result<(), RepowatchError> {
    if let Commands::Validate(args) = &cli.command {
        return handle_validate(&args.target(cli.config.as_deref())).await;
    }

    let settings = config::load_config(cli.config.as_deref().map(Path::new)).await?;

    match cli.command {
        Commands::Collect(args) => cli::collect::handle_collect(args, &settings).await,
        Commands::Report(args) => cli::report::handle_report(args, &settings).await,
        Commands::Scan(args) => cli::scan::handle_scan(args, &settings).await,
        Commands::Perf(args) => cli::perf::handle_perf(args, &settings).await,
        Commands::Cost(args) => cli::cost::handle_cost(args, &settings).await,
        Commands::Validate(_) => Ok(()),
    }
}

async fn handle_validate(path: &str) -> Result<(), RepowatchError> {
    let _config = config::parse_config(Path::new(path)).await?;
    println!("Configuration is valid: {}", path);
    Ok(())
}

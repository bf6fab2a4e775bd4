use clap::Parser;
use pom_catalog::PomCataloger;
use pom_scan::{Cli, ScanMode, discover, scan, write_reports};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let files = discover(&cli.paths, &config, &PomCataloger::new());
    tracing::info!(count = files.len(), "discovered POM documents");

    let mode = if cli.project {
        ScanMode::Project
    } else {
        ScanMode::Packages
    };
    let outcomes = scan(files, &config, mode).await;

    let summary = write_reports(&mut std::io::stdout().lock(), &outcomes)?;
    tracing::info!(
        documents = summary.documents,
        records = summary.records,
        failures = summary.failures,
        "scan finished"
    );

    Ok(if summary.failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

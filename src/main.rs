use clap::Parser;
use colored::*;
use github_data_collector::cli::Cli;
use github_data_collector::collector;
use github_data_collector::error::Result;
use github_data_collector::github::GitHubClient;
use github_data_collector::output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Repository Data Collector".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let client = GitHubClient::new(cli.token)?;
    let rows = collector::collect(&client, &cli.repositories).await;

    let path = output::default_output_path();
    output::write_csv(&rows, &path)?;

    println!("{}", "CSV file saved successfully.".green());

    Ok(())
}

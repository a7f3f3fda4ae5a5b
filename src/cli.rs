use clap::Parser;

#[derive(Parser)]
#[command(name = "github-data-collector")]
#[command(about = "GitHub Repository Data Collector - Writes star and open pull request counts to CSV")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Repositories to process, in owner/name form
    #[arg(value_name = "OWNER/NAME", required = true)]
    pub repositories: Vec<String>,

    /// GitHub personal access token
    #[arg(long)]
    pub token: Option<String>,
}

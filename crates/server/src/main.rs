use anyhow::Result;
use clap::{Parser, Subcommand};

use server::config::WorkforceConfig;
use server::db::DbClient;
use server::{api, seed};

#[derive(Debug, Parser)]
#[command(name = "server")]
#[command(about = "Workforce directory and reporting API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API server.
    Serve,
    /// Initialize the database and load the sample dataset.
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = WorkforceConfig::load()?;

    match cli.command {
        Command::Serve => api::run(&config).await,
        Command::Seed => {
            let db = DbClient::initialize(&config.database_path()).await?;
            seed::run(&db).await
        }
    }
}

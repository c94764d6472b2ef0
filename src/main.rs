use std::sync::Arc;

use clap::Parser;
use todosheet::{Config, Server};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "todosheet", about = "Spreadsheet-backed todo list server")]
struct Args {
    /// Path to a TOML config file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<String>,
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.level.clone()));

    match &config.log.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    init_logging(&config)?;

    info!("Starting todosheet - spreadsheet backed todo list");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let server = Server::start(&config).await?;
    info!("Server is running on {}", config.startup_url());

    server.run().await?;
    Ok(())
}

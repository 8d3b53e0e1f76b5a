use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod models;
pub(crate) mod server;
pub(crate) mod store;


#[derive(Debug, Parser)]
#[command(about = "In-memory backend for the intranet resources, reputation and progress")]
struct Args {
    /// YAML config file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Bind address, overrides `server.address` from the config
    #[arg(short, long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut config = match args.config {
        Some(path) => AppConfig::from_yaml_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(address) = args.address {
        config.server.address = address;
    }
    server::run_all(&config).await?;

    Ok(())
}

//! switchboard — multi-agent contact-center demo server

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;
use switchboard_core::catalog::OrderCatalog;
use switchboard_core::directory::DepartmentDirectory;
use switchboard_core::{gateway_agent, orders_agent, support_agent};
use switchboard_server::AgentServer;

#[derive(Parser)]
#[command(name = "switchboard")]
#[command(version)]
#[command(about = "Multi-agent contact center: gateway routing, orders, and support")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the agent server
    Serve,

    /// Show the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Serve => cmd_serve().await,
        Commands::Config => cmd_config(),
    }
}

async fn cmd_serve() -> Result<()> {
    let config = Config::from_env()?;
    debug!("Resolved configuration: {:?}", config);

    let directory = Arc::new(DepartmentDirectory::standard());
    let catalog = Arc::new(OrderCatalog::seed());

    let mut server = AgentServer::new(config.bind_addr()?, config.version.clone());
    server.register(gateway_agent(directory))?;
    server.register(orders_agent(catalog))?;
    server.register(support_agent())?;

    info!("Starting switchboard v{}", config.version);
    server.run().await
}

fn cmd_config() -> Result<()> {
    let config = Config::from_env()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

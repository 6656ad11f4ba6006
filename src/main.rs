//! Vanity import path server binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vanity_server::config::load_config;
use vanity_server::http::VanityServer;

#[derive(Parser)]
#[command(name = "vanity-server")]
#[command(about = "Serves go-import meta tags for vanity import paths", long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(default_value = "vanity.toml")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vanity_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Arc::new(load_config(&cli.config)?);

    tracing::info!(
        host = config.host.as_deref().unwrap_or("<request host>"),
        cache_max_age = config.cache_max_age,
        paths = config.paths.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&cli.listen).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = VanityServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

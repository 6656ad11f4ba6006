//! Batch renderer: writes static vanity pages for every input line.
//!
//! Reads whitespace-separated `{module} {import-path}` lines from stdin and
//! writes one `index.html` per line under the output directory.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vanity_server::config::load_config;
use vanity_server::render::Renderer;

#[derive(Parser)]
#[command(name = "vanity-render")]
#[command(about = "Renders vanity import pages to static files", long_about = None)]
struct Cli {
    /// Directory the rendered pages are written into.
    output_dir: PathBuf,

    /// Path to the configuration file.
    #[arg(short, long, default_value = "vanity.toml")]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vanity_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let renderer = Renderer::new(&config, &cli.output_dir)?;

    let stdin = io::stdin();
    let count = renderer.render_all(stdin.lock())?;
    tracing::info!(count, output_dir = %cli.output_dir.display(), "rendered vanity pages");
    Ok(())
}

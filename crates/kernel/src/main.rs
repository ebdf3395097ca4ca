//! Vetrina site server
//!
//! Renders CMS page-builder documents to HTML and serves them over HTTP.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vetrina_kernel::cli::{self, Cli, Command};
use vetrina_kernel::routes::build_router;
use vetrina_kernel::{AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(port = config.port, "Configuration loaded");

    let state = AppState::new(&config).context("failed to initialize application state")?;

    match args.command() {
        Command::Serve => serve(&config, state).await,
        Command::Schema => cli::print_schema(&state),
        Command::Render { slug } => cli::print_page(&state, slug.as_deref()).await,
        Command::Validate => cli::validate_snapshot(&state).await,
    }
}

async fn serve(config: &Config, state: AppState) -> Result<()> {
    info!(
        block_types = state.registry().len(),
        environment = config.site_environment.name(),
        "Starting Vetrina"
    );

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    // Logs go to stderr so `render` and `schema` output stays clean on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

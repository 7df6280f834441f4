//! Development server for the login resolver.
//!
//! Serves the sample login routes; claims come from the static-claims layer.

mod app;
mod config;
mod logging;
mod static_claims;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "login-server", about = "Login resolver development server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides `server.bind`
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    logging::init(&cfg.logging)?;

    let app = app::build(&cfg)?;
    let addr = cli.bind.unwrap_or(cfg.server.bind);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "login-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("login-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

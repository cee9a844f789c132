mod cache;
mod color_scale;
mod constants;
mod error;
mod fetcher;
mod figure;
mod formatters;
mod models;
mod registry;
mod service;
mod snapshot;

use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::HeatmapConfig;
use crate::service::Heatmap;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP transport, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "us_heatmap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting US heat map server");

    let heatmap = Heatmap::new(HeatmapConfig::default())?;
    let server = heatmap.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

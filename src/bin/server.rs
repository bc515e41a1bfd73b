//! Standalone API server (without the Dioxus frontend)
//! Serves only the explore and download endpoints, for backend development.
//!
//! Run with: cargo run --bin server --features server

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use reelhub_explore::catalog::Catalog;
use reelhub_explore::handlers::{download_dataset_handler, explore_handler};

#[derive(Debug, Parser)]
#[command(name = "reelhub-explore-server", about = "Standalone explore API server")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Catalog JSON file; defaults to the embedded seed
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    tracing::info!("Starting ReelHub Explore API server (standalone)...");

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::embedded().context("parsing embedded catalog")?,
    };
    let catalog = Arc::new(catalog);

    // NOTE: Axum 0.8 uses {param} syntax instead of :param
    let app = Router::new()
        .route("/explore", post(explore_handler))
        .route(
            "/movie/dataset/download/{dataset_id}",
            get(download_dataset_handler),
        )
        .layer(Extension(catalog))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}

//! ReelHub Explore - Main Entry Point
//!
//! Configures the Axum routes behind the Dioxus application.
//! Uses the dioxus::serve() pattern for dx serve compatibility.

use reelhub_explore::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::{
        routing::{get, post},
        Extension,
    };
    use std::sync::Arc;

    use reelhub_explore::catalog::Catalog;
    use reelhub_explore::handlers::{download_dataset_handler, explore_handler};
    use reelhub_explore::shared::logging;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting ReelHub Explore...");

    dioxus::serve(|| {
        async move {
            // Optional catalog override, e.g. REELHUB_CATALOG=./data/catalog.json
            let override_path = std::env::var("REELHUB_CATALOG").ok();
            let catalog = match &override_path {
                Some(path) => Catalog::from_path(std::path::Path::new(path)),
                None => Catalog::embedded(),
            };
            let catalog = match catalog {
                Ok(catalog) => Arc::new(catalog),
                Err(e) => {
                    logging::log_catalog_error(
                        override_path.as_deref().unwrap_or("embedded"),
                        &e.to_string(),
                    );
                    std::process::exit(1);
                }
            };

            // NOTE: Axum 0.8 uses {param} syntax instead of :param
            let router = dioxus::server::router(App)
                .route("/explore", post(explore_handler))
                .route(
                    "/movie/dataset/download/{dataset_id}",
                    get(download_dataset_handler),
                )
                .layer(Extension(catalog));

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to the browser console to confirm the WASM bundle loaded
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(
        "[WASM] ReelHub Explore initialized",
    ));
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}

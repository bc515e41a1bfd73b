//! Explore page for a self-hosted movie dataset hub.
//!
//! The crate builds two ways: the WASM bundle renders the filter panel and
//! result cards in the browser, the server build adds the in-memory catalog
//! and the axum handlers behind `/explore` and the download route.

pub mod app;
pub mod domain;
pub mod shared;

// Catalog and handlers never compile for WASM
#[cfg(not(target_arch = "wasm32"))]
pub mod catalog;
#[cfg(not(target_arch = "wasm32"))]
pub mod handlers;

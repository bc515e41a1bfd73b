pub mod constants;
pub mod errors;
pub mod hooks;
pub mod utils;

// Structured tracing helpers for the backend; the browser build has no
// subscriber to feed
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

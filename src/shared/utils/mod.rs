// Utility functions
// Formatting, URL parsing, request helpers

pub mod format;
pub mod page_token;
pub mod query_string;

pub use format::{format_created_at, human_readable_size, movies_count_label, results_found_label};
pub use page_token::page_token;
pub use query_string::query_param_from_search;

#[cfg(target_arch = "wasm32")]
pub use query_string::initial_query_param;

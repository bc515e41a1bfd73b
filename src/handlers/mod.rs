/// Search endpoint backing the filter panel
pub mod explore;

/// Dataset bundle download endpoint
pub mod download;

pub use download::download_dataset_handler;
pub use explore::explore_handler;

//! Published dataset catalog (server-only)
//!
//! An in-memory collection loaded once at startup, either from the embedded
//! seed or from a JSON file named on the command line.

pub mod filter;
pub mod store;

pub use filter::{filter_datasets, normalize_query};
pub use store::{Catalog, DatasetRecord, MovieRecord, SharedCatalog};

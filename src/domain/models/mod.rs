// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod dataset;
pub mod publication;
pub mod search;

pub use dataset::{Author, DatasetSummary};
pub use publication::PublicationType;
pub use search::{SearchCriteria, SortOrder};

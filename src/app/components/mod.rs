pub mod common;
pub mod dataset_card;
pub mod filter_panel;

pub use common::{EmptyResults, ErrorMessage, LoadingText};
pub use dataset_card::DatasetCard;
pub use filter_panel::FilterPanel;

// Custom Dioxus hooks
pub mod use_explore_search;

pub use use_explore_search::{
    run_initial_search, run_search, use_explore_search, ExploreSearch, FilterControls,
    RequestSequence,
};

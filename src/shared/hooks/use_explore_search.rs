//! Explore page state hook
//!
//! Holds the filter control values, the current result list and the request
//! sequencing that keeps a slow response from overwriting a newer one.

use dioxus::prelude::*;

use crate::domain::models::{DatasetSummary, PublicationType, SearchCriteria, SortOrder};
use crate::shared::constants::ANY_PUBLICATION_TYPE;
use crate::shared::utils::page_token;

#[cfg(target_arch = "wasm32")]
use crate::shared::constants::EXPLORE_ENDPOINT;
#[cfg(target_arch = "wasm32")]
use crate::shared::errors::{AppError, Result};
#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;

/// Current values of the filter controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControls {
    pub query: String,
    /// Wire token of the selected category, or "any".
    pub publication_filter: String,
    pub sorting: SortOrder,
    /// Opaque hidden-field token generated once per page load.
    pub csrf_token: String,
}

impl FilterControls {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            publication_filter: ANY_PUBLICATION_TYPE.to_string(),
            sorting: SortOrder::default(),
            csrf_token: page_token(),
        }
    }

    /// Snapshot the controls into the wire criteria for one request.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            csrf_token: self.csrf_token.clone(),
            query: self.query.clone(),
            publication_type: self.publication_filter.clone(),
            sorting: self.sorting.as_str().to_string(),
        }
    }

    /// Reset every control to its default. The token survives; it belongs to
    /// the page load, not to the filter values.
    pub fn clear(&mut self) {
        self.query.clear();
        self.publication_filter = ANY_PUBLICATION_TYPE.to_string();
        self.sorting = SortOrder::default();
    }

    /// A clicked tag becomes the whole query.
    pub fn apply_tag(&mut self, tag: &str) {
        self.query = tag.trim().to_string();
    }

    /// A clicked category badge selects the dropdown option whose label
    /// matches. Unknown labels leave the selection untouched.
    pub fn apply_category_label(&mut self, label: &str) -> bool {
        match PublicationType::from_display_name(label) {
            Some(publication_type) => {
                self.publication_filter = publication_type.wire_value().to_string();
                true
            }
            None => false,
        }
    }
}

impl Default for FilterControls {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic request counter. Only the latest issued request may apply its
/// response, so overlapping requests can finish in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue the next request number.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}

/// Explore page state hook
#[derive(Clone, Copy, PartialEq)]
pub struct ExploreSearch {
    pub controls: Signal<FilterControls>,
    /// `None` until the first response lands.
    pub results: Signal<Option<Vec<DatasetSummary>>>,
    pub is_searching: Signal<bool>,
    pub error: Signal<Option<String>>,
    sequence: Signal<RequestSequence>,
}

impl ExploreSearch {
    /// Mark a new request as the latest and return its number.
    pub fn begin_request(&mut self) -> u64 {
        self.is_searching.set(true);
        self.error.set(None);
        self.sequence.write().begin()
    }

    /// Apply a response if `seq` still names the latest request. Stale
    /// responses are dropped wholesale so the rendered list always reflects
    /// the newest criteria.
    pub fn apply_results(&mut self, seq: u64, datasets: Vec<DatasetSummary>) -> bool {
        if !self.sequence.read().is_current(seq) {
            return false;
        }
        self.results.set(Some(datasets));
        self.is_searching.set(false);
        true
    }

    /// Record a failed request. Existing results stay on screen; only the
    /// error banner changes.
    pub fn apply_failure(&mut self, seq: u64, message: String) -> bool {
        if !self.sequence.read().is_current(seq) {
            return false;
        }
        self.error.set(Some(message));
        self.is_searching.set(false);
        true
    }

    pub fn clear_filters(&mut self) {
        self.controls.write().clear();
    }

    pub fn set_tag_as_query(&mut self, tag: &str) {
        self.controls.write().apply_tag(tag);
    }

    pub fn set_category_filter(&mut self, label: &str) {
        self.controls.write().apply_category_label(label);
    }
}

/// Hook wiring the explore page state into component scope.
pub fn use_explore_search() -> ExploreSearch {
    let controls = use_signal(FilterControls::new);
    let results = use_signal(|| None::<Vec<DatasetSummary>>);
    let is_searching = use_signal(|| false);
    let error = use_signal(|| None::<String>);
    let sequence = use_signal(RequestSequence::default);

    ExploreSearch {
        controls,
        results,
        is_searching,
        error,
        sequence,
    }
}

/// Snapshot the current controls, POST them and apply the response.
///
/// The response is matched against the request number issued here; an older
/// in-flight request that resolves later is discarded.
#[cfg(target_arch = "wasm32")]
pub fn run_search(mut state: ExploreSearch) {
    // peek: snapshotting the controls must not subscribe the caller's scope
    let criteria = state.controls.peek().criteria();
    let seq = state.begin_request();

    spawn(async move {
        match post_criteria(&criteria).await {
            Ok(datasets) => {
                state.apply_results(seq, datasets);
            }
            Err(e) => {
                tracing::error!("Search request error: {}", e);
                state.apply_failure(seq, e.to_string());
            }
        }
    });
}

/// Event handlers never fire during server rendering; the no-op keeps the
/// components compiling for every target.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_search(_state: ExploreSearch) {}

/// Seed the query box from a `?query=` URL parameter, then run the initial
/// search with whatever the controls hold.
#[cfg(target_arch = "wasm32")]
pub fn run_initial_search(mut state: ExploreSearch) {
    if let Some(query) = crate::shared::utils::initial_query_param() {
        state.controls.write().query = query;
    }
    run_search(state);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn run_initial_search(_state: ExploreSearch) {}

#[cfg(target_arch = "wasm32")]
async fn post_criteria(criteria: &SearchCriteria) -> Result<Vec<DatasetSummary>> {
    let response = Request::post(EXPLORE_ENDPOINT)
        .header("content-type", "application/json")
        .json(criteria)?
        .send()
        .await?;

    if !response.ok() {
        return Err(AppError::SearchRequestError(format!(
            "explore endpoint returned HTTP {}",
            response.status()
        )));
    }

    Ok(response.json::<Vec<DatasetSummary>>().await?)
}

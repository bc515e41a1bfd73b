//! Structured logging for the explore backend
//!
//! Provides consistent, contextual logging across catalog loading, search
//! handling and dataset downloads. Uses structured tracing fields keyed by
//! operation.

use std::path::Path;

/// Operation labels attached to every structured log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    CatalogLoad,
    ExploreSearch,
    DatasetDownload,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::CatalogLoad => "catalog_load",
            LogOperation::ExploreSearch => "explore_search",
            LogOperation::DatasetDownload => "dataset_download",
        }
    }
}

/// Log a catalog loaded from the embedded seed
pub fn log_catalog_embedded(dataset_count: usize) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = "embedded",
        dataset_count = dataset_count,
        "Catalog loaded"
    );
}

/// Log a catalog loaded from a JSON file
pub fn log_catalog_file(path: &Path, dataset_count: usize) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = %path.display(),
        dataset_count = dataset_count,
        "Catalog loaded"
    );
}

/// Log a catalog load failure
pub fn log_catalog_error(source: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = source,
        error = error,
        "Failed to load catalog"
    );
}

/// Log an incoming search request
pub fn log_search_request(query: &str, publication_type: &str, sorting: &str) {
    tracing::info!(
        operation = LogOperation::ExploreSearch.as_str(),
        query = query,
        publication_type = publication_type,
        sorting = sorting,
        "Search request received"
    );
}

/// Log the outcome of a search request
pub fn log_search_result(query: &str, matched: usize, catalog_size: usize) {
    tracing::info!(
        operation = LogOperation::ExploreSearch.as_str(),
        query = query,
        matched = matched,
        catalog_size = catalog_size,
        "Search request answered"
    );
}

/// Log a served dataset download
pub fn log_download_served(dataset_id: u64, movie_count: usize) {
    tracing::info!(
        operation = LogOperation::DatasetDownload.as_str(),
        dataset_id = dataset_id,
        movie_count = movie_count,
        "Dataset download served"
    );
}

/// Log a download request for an id the catalog does not know
pub fn log_download_missing(dataset_id: u64) {
    tracing::warn!(
        operation = LogOperation::DatasetDownload.as_str(),
        dataset_id = dataset_id,
        "Download requested for unknown dataset"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::CatalogLoad.as_str(), "catalog_load");
        assert_eq!(LogOperation::ExploreSearch.as_str(), "explore_search");
        assert_eq!(LogOperation::DatasetDownload.as_str(), "dataset_download");
    }
}

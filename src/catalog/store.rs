use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::{Author, DatasetSummary, PublicationType, SearchCriteria};
use crate::shared::constants::DOWNLOAD_URL_PREFIX;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;
use crate::shared::utils::human_readable_size;

use super::filter;

/// Seed catalog compiled into the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// One movie inside a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_company: Option<String>,
}

/// One dataset as stored in the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub publication_type: PublicationType,
    #[serde(default)]
    pub publication_doi: Option<String>,
    /// Present only once the dataset has been published.
    #[serde(default)]
    pub dataset_doi: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
    pub created_at: DateTime<Utc>,
    pub total_size_in_bytes: u64,
    #[serde(default)]
    pub movies: Vec<MovieRecord>,
}

impl DatasetRecord {
    /// Unpublished datasets never appear in search results.
    pub fn is_published(&self) -> bool {
        self.dataset_doi.is_some()
    }

    /// Landing page for the dataset, the DOI route once published.
    pub fn view_url(&self) -> String {
        match &self.dataset_doi {
            Some(doi) => format!("/doi/{doi}"),
            None => format!("/movie/dataset/{}", self.id),
        }
    }

    /// Project the record into the card payload the explore page renders.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            publication_type: self.publication_type.display_name().to_string(),
            authors: self.authors.clone(),
            tags: self.tags.clone(),
            url: self.view_url(),
            download: format!("{DOWNLOAD_URL_PREFIX}/{}", self.id),
            created_at: self.created_at,
            movies_count: self.movies.len(),
            total_size_in_bytes: self.total_size_in_bytes,
            total_size_in_human_format: human_readable_size(self.total_size_in_bytes),
        }
    }
}

/// In-memory dataset catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    datasets: Vec<DatasetRecord>,
}

/// Handle shared with the Axum handlers via `Extension`.
pub type SharedCatalog = Arc<Catalog>;

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let datasets: Vec<DatasetRecord> = serde_json::from_str(json)?;
        Ok(Self { datasets })
    }

    /// Load the seed catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let catalog = Self::from_json(EMBEDDED_CATALOG)?;
        logging::log_catalog_embedded(catalog.len());
        Ok(catalog)
    }

    /// Load a catalog from a JSON file. Callers add the path to the error
    /// context they report.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        logging::log_catalog_file(path, catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&DatasetRecord> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Like [`Self::get`], but an unknown id is an error.
    pub fn get_required(&self, id: u64) -> Result<&DatasetRecord> {
        self.get(id).ok_or(AppError::DatasetNotFound(id))
    }

    pub fn datasets(&self) -> &[DatasetRecord] {
        &self.datasets
    }

    /// Run a search over the catalog, returning ready-to-render cards.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<DatasetSummary> {
        filter::filter_datasets(&self.datasets, criteria)
            .into_iter()
            .map(DatasetRecord::summary)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        // Every embedded record must carry a usable category label
        for dataset in catalog.datasets() {
            assert!(!dataset.summary().publication_type.is_empty());
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::embedded().unwrap();
        let first_id = catalog.datasets()[0].id;
        assert!(catalog.get(first_id).is_some());
        assert!(catalog.get(9_999_999).is_none());
        assert!(matches!(
            catalog.get_required(9_999_999),
            Err(AppError::DatasetNotFound(9_999_999))
        ));
    }

    #[test]
    fn test_summary_projection() {
        let json = r#"[{
            "id": 7,
            "title": "Test Collection",
            "description": "A handful of films",
            "publication_type": "article",
            "dataset_doi": "10.1234/test-7",
            "tags": ["movies"],
            "authors": [{"name": "A. Author"}],
            "created_at": "2024-07-15T15:42:00Z",
            "total_size_in_bytes": 2516582,
            "movies": [
                {"title": "First", "year": 1968},
                {"title": "Second", "year": 1982}
            ]
        }]"#;

        let catalog = Catalog::from_json(json).unwrap();
        let summary = catalog.datasets()[0].summary();

        assert_eq!(summary.publication_type, "Journal Article");
        assert_eq!(summary.url, "/doi/10.1234/test-7");
        assert_eq!(summary.download, "/movie/dataset/download/7");
        assert_eq!(summary.movies_count, 2);
        assert_eq!(summary.total_size_in_human_format, "2.40 MB");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Catalog::from_json("not json").is_err());
        assert!(Catalog::from_json(r#"[{"id": 1}]"#).is_err());
    }
}

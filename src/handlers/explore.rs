use axum::{Extension, Json};

use crate::catalog::SharedCatalog;
use crate::domain::models::{DatasetSummary, SearchCriteria};
use crate::shared::logging;

/// POST /explore
/// Run the submitted criteria over the catalog and return matching cards,
/// already sorted. The csrf_token field is carried but never validated.
pub async fn explore_handler(
    Extension(catalog): Extension<SharedCatalog>,
    Json(criteria): Json<SearchCriteria>,
) -> Json<Vec<DatasetSummary>> {
    logging::log_search_request(&criteria.query, &criteria.publication_type, &criteria.sorting);

    let results = catalog.search(&criteria);
    logging::log_search_result(&criteria.query, results.len(), catalog.len());

    Json(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    const TEST_CATALOG: &str = r#"[
        {
            "id": 1,
            "title": "Sci-Fi Masterpieces",
            "description": "Classics of the genre",
            "publication_type": "other",
            "dataset_doi": "10.1234/scifi",
            "tags": ["sci-fi", "space"],
            "authors": [{"name": "Sci-Fi Film Institute"}],
            "created_at": "2024-07-15T09:30:00Z",
            "total_size_in_bytes": 2048,
            "movies": [{"title": "Blade Runner", "year": 1982, "director": "Ridley Scott"}]
        },
        {
            "id": 2,
            "title": "Film Journal Survey",
            "description": "Published article companion data",
            "publication_type": "article",
            "dataset_doi": "10.1234/survey",
            "tags": ["journal"],
            "authors": [{"name": "R. Researcher"}],
            "created_at": "2024-02-01T12:00:00Z",
            "total_size_in_bytes": 512,
            "movies": []
        }
    ]"#;

    fn shared_catalog() -> SharedCatalog {
        Arc::new(Catalog::from_json(TEST_CATALOG).unwrap())
    }

    #[tokio::test]
    async fn test_explore_returns_all_for_default_criteria() {
        let Json(results) =
            explore_handler(Extension(shared_catalog()), Json(SearchCriteria::default())).await;

        assert_eq!(results.len(), 2);
        // Default ordering is newest first
        assert_eq!(results[0].id, 1);
        assert_eq!(results[1].id, 2);
    }

    #[tokio::test]
    async fn test_explore_applies_query_words() {
        let criteria = SearchCriteria::new("ridley scott", "any", "newest");
        let Json(results) = explore_handler(Extension(shared_catalog()), Json(criteria)).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Sci-Fi Masterpieces");
        assert_eq!(results[0].movies_count, 1);
    }

    #[tokio::test]
    async fn test_explore_applies_category_filter() {
        let criteria = SearchCriteria::new("", "article", "newest");
        let Json(results) = explore_handler(Extension(shared_catalog()), Json(criteria)).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].publication_type, "Journal Article");
    }

    #[tokio::test]
    async fn test_explore_empty_result_set() {
        let criteria = SearchCriteria::new("nonexistent-term", "any", "newest");
        let Json(results) = explore_handler(Extension(shared_catalog()), Json(criteria)).await;
        assert!(results.is_empty());
    }
}

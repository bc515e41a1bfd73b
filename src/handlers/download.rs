use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    Extension,
};
use serde::Serialize;

use crate::catalog::{MovieRecord, SharedCatalog};
use crate::shared::logging;

/// JSON bundle served as the dataset "download".
#[derive(Debug, Serialize)]
struct DownloadBundle<'a> {
    dataset_id: u64,
    title: &'a str,
    publication_type: &'a str,
    movies: &'a [MovieRecord],
}

/// GET /movie/dataset/download/{dataset_id}
/// Serve the dataset movie list as a JSON attachment.
pub async fn download_dataset_handler(
    Extension(catalog): Extension<SharedCatalog>,
    Path(dataset_id): Path<u64>,
) -> Result<impl IntoResponse, StatusCode> {
    let record = catalog.get_required(dataset_id).map_err(|_| {
        logging::log_download_missing(dataset_id);
        StatusCode::NOT_FOUND
    })?;

    let bundle = DownloadBundle {
        dataset_id: record.id,
        title: &record.title,
        publication_type: record.publication_type.display_name(),
        movies: &record.movies,
    };
    let body = serde_json::to_string_pretty(&bundle).map_err(|e| {
        tracing::error!("Failed to serialize dataset {}: {}", dataset_id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    logging::log_download_served(dataset_id, record.movies.len());

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"movie_dataset_{dataset_id}.json\""),
        ),
    ];
    Ok((headers, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    const TEST_CATALOG: &str = r#"[{
        "id": 42,
        "title": "Heist Films",
        "description": "Capers and cons",
        "publication_type": "report",
        "dataset_doi": "10.1234/heist",
        "created_at": "2024-03-10T08:00:00Z",
        "total_size_in_bytes": 4096,
        "movies": [
            {"title": "Rififi", "year": 1955, "director": "Jules Dassin"},
            {"title": "Le Cercle Rouge", "year": 1970, "director": "Jean-Pierre Melville"}
        ]
    }]"#;

    fn shared_catalog() -> SharedCatalog {
        Arc::new(Catalog::from_json(TEST_CATALOG).unwrap())
    }

    #[tokio::test]
    async fn test_download_serves_attachment() {
        let response = download_dataset_handler(Extension(shared_catalog()), Path(42))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"movie_dataset_42.json\"");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["dataset_id"], 42);
        assert_eq!(json["movies"].as_array().unwrap().len(), 2);
        assert_eq!(json["movies"][0]["title"], "Rififi");
    }

    #[tokio::test]
    async fn test_download_unknown_id_is_404() {
        let status = download_dataset_handler(Extension(shared_catalog()), Path(7))
            .await
            .err();
        assert_eq!(status, Some(StatusCode::NOT_FOUND));
    }
}

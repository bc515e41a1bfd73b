use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("dataset {0} not found")]
    DatasetNotFound(u64),

    #[error("search request failed: {0}")]
    SearchRequestError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::SearchRequestError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

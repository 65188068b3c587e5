use thiserror::Error;

/// Errors produced while decoding catalog payloads or building image URLs.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Catalog payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid image base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Image base URL cannot carry a path: {0}")]
    CannotBeABase(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

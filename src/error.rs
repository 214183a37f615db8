use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("quality must be between 0 and 5, got {0}")]
    InvalidQuality(i64),

    #[error("card {0} not found")]
    CardNotFound(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidQuality(_) => StatusCode::BAD_REQUEST,
            AppError::CardNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("request failed: {self}");
        }

        (status, self.to_string()).into_response()
    }
}

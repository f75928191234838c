use crate::model::ErrorsResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};
use vidcat_core::{CatalogError, ValidationErrors};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid payload: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("video not found")]
    NotFound,
    #[error("catalog operation failed: {0}")]
    Catalog(CatalogError),
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound(_) => AppError::NotFound,
            other => AppError::Catalog(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                warn!(fields = ?errors.fields(), "rejected payload");
                (StatusCode::BAD_REQUEST, Json(ErrorsResponse::from(errors))).into_response()
            }
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Catalog(source) => {
                error!(error = %source, "catalog operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

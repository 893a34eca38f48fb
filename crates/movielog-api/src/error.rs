use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use movielog_core::CatalogError;
use thiserror::Error;
use tracing::error;
use crate::envelope::Envelope;

/// API errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Movie not found")]
    MovieNotFound,

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Data already exists")]
    AlreadyInitialized,

    #[error("{0}")]
    Internal(String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(errors) => ApiError::Validation(errors),
            CatalogError::NotFound(_) => ApiError::MovieNotFound,
            CatalogError::AlreadyInitialized => ApiError::AlreadyInitialized,
            exhausted @ CatalogError::IdsExhausted(_) => ApiError::Internal(exhausted.to_string()),
            CatalogError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidJson | ApiError::AlreadyInitialized => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MovieNotFound | ApiError::EndpointNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(operation = "request_failed", error = %self, "Unhandled error while serving request");
        }

        let message = self.to_string();
        let errors = match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        };

        (status, Json(Envelope::failure(message, errors))).into_response()
    }
}

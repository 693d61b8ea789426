use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use appscout_catalog::CatalogError;
use appscout_core::{CollectionError, WorkflowError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("App name is required")]
    MissingTerm,

    #[error("Failed to fetch app data")]
    Upstream(#[source] CatalogError),

    #[error("Invalid page state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingTerm { .. } => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidState { .. } => StatusCode::BAD_REQUEST,
            ApiError::Workflow { .. } => StatusCode::CONFLICT,
            ApiError::Collection { .. } => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            ApiError::Upstream(e) => json!({ "error": self.to_string(), "details": e.to_string() }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingTerm.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Upstream(CatalogError::Status(502))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(CollectionError::IndexOutOfRange { index: 3, len: 1 })
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::MissingTerm.to_string(), "App name is required");
        assert_eq!(
            ApiError::Upstream(CatalogError::Network("refused".to_string())).to_string(),
            "Failed to fetch app data"
        );
    }
}

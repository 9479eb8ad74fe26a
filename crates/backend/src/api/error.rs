use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::shared::data::storage::StorageError;

/// Error envelope returned by every API handler: a status code plus a JSON
/// body of the form `{"error": "..."}`.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Authentication required")
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateEmail => Self::new(StatusCode::CONFLICT, err.to_string()),
            StorageError::NotFound => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            StorageError::Invalid(message) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            StorageError::Backend(inner) => {
                tracing::error!("storage error: {:#}", inner);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

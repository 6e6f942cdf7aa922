use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::StoreError;
use crate::domain::roster::AssignmentError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Store failure during a read; an unavailable store reads as not found
    pub fn from_read(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(_) => Self::not_found(err.to_string()),
            other => Self::from(other),
        }
    }

    /// Store failure during creation; an unavailable store is a bad request
    pub fn from_create(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(_) => Self::bad_request(err.to_string()),
            other => Self::from(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        }

        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::not_found(err.to_string()),
            StoreError::Duplicate { .. } => Self::bad_request(err.to_string()),
            StoreError::Conflict { .. }
            | StoreError::Unavailable(_)
            | StoreError::Database(_) => Self::internal_server_error(err.to_string()),
        }
    }
}

impl From<AssignmentError> for ApiError {
    fn from(err: AssignmentError) -> Self {
        match err {
            AssignmentError::TeamNotFound(_) | AssignmentError::PlayerNotFound(_) => {
                Self::not_found(err.to_string())
            }
            AssignmentError::RosterFull(_) | AssignmentError::PlayerAlreadyAssigned { .. } => {
                Self::bad_request(err.to_string())
            }
            AssignmentError::Store(store) => Self::from(store),
        }
    }
}

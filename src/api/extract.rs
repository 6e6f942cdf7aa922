use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::api::errors::ApiError;

/// JSON request body whose rejections render as [`ApiError`] (400)
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

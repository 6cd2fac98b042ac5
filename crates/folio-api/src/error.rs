//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Response bodies use a `detail` key: a string for 404/500 and a list of
//! `{field, message}` objects for 422.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use folio_core::validate::ValidationErrors;
use serde_json::json;
use thiserror::Error;

/// Generic message returned for every internal failure.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation failed: {0}")]
  Validation(ValidationErrors),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("internal error: {0}")]
  Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn internal(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Internal(Box::new(e))
  }
}

impl From<ValidationErrors> for ApiError {
  fn from(errors: ValidationErrors) -> Self { Self::Validation(errors) }
}

/// A body that could not be decoded is reported like any other invalid input.
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    Self::Validation(ValidationErrors::single("body", rejection.body_text()))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(errors) => {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": errors })))
          .into_response()
      }
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "detail": m }))).into_response()
      }
      ApiError::Internal(e) => {
        tracing::error!(error = %e, "request failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "detail": INTERNAL_MESSAGE })),
        )
          .into_response()
      }
    }
  }
}

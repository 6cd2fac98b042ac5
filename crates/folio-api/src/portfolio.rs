//! Handlers for the static endpoints: the API root and the portfolio document.

use axum::{Json, extract::State};
use folio_core::{portfolio::Portfolio, store::SubmissionStore};
use serde_json::{Value, json};

use crate::AppState;

/// `GET /`
pub async fn root() -> Json<Value> { Json(json!({ "message": "Hello World" })) }

/// `GET /portfolio`
pub async fn handler<S>(State(state): State<AppState<S>>) -> Json<Portfolio>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
{
  Json(Portfolio::clone(&state.portfolio))
}

//! Handlers for `/status` heartbeats.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use folio_core::{
  status::{StatusCheck, StatusCheckForm},
  store::{STATUS_LIST_LIMIT, SubmissionStore},
};

use crate::{AppState, error::ApiError};

/// `POST /status` — body: `{"client_name":"..."}`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  payload: Result<Json<StatusCheckForm>, JsonRejection>,
) -> Result<Json<StatusCheck>, ApiError>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
{
  let Json(form) = payload?;
  let client_name = form.validate()?;

  let check = state
    .store
    .record_status_check(client_name)
    .await
    .map_err(ApiError::internal)?;
  Ok(Json(check))
}

/// `GET /status`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<StatusCheck>>, ApiError>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
{
  let checks = state
    .store
    .list_status_checks(STATUS_LIST_LIMIT)
    .await
    .map_err(ApiError::internal)?;
  Ok(Json(checks))
}

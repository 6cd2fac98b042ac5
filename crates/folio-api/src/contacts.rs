//! Handlers for contact submissions.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contact` | Body: [`ContactForm`]; 422 on any rule violation |
//! | `GET`  | `/contacts` | Most recent first, capped at [`CONTACT_LIST_LIMIT`] |

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use folio_core::{
  contact::{ContactForm, ContactReceipt, ContactSubmission},
  store::{CONTACT_LIST_LIMIT, SubmissionStore},
};

use crate::{AppState, error::ApiError};

// ─── Submit ───────────────────────────────────────────────────────────────────

/// `POST /contact`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactReceipt>, ApiError>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
{
  let Json(form) = payload?;
  let input = form.validate()?;

  let stored = state
    .store
    .record_contact(input)
    .await
    .map_err(ApiError::internal)?;

  tracing::info!(
    id = %stored.id,
    name = %stored.name,
    email = %stored.email,
    "contact form submitted"
  );
  Ok(Json(ContactReceipt::accepted()))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<ContactSubmission>>, ApiError>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
{
  let contacts = state
    .store
    .list_contacts(CONTACT_LIST_LIMIT)
    .await
    .map_err(ApiError::internal)?;
  Ok(Json(contacts))
}

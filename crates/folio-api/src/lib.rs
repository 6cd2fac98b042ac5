//! JSON HTTP API for the folio portfolio backend.
//!
//! Exposes an axum [`Router`] backed by any
//! [`folio_core::store::SubmissionStore`]. Every route is mounted under the
//! configured prefix (default `/api`).
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET`  | `/` | [`portfolio::root`] |
//! | `GET`, `POST` | `/status` | [`status`] |
//! | `POST` | `/contact` | [`contacts::submit`] |
//! | `GET`  | `/contacts` | [`contacts::list`] (only when `expose_contacts`) |
//! | `GET`  | `/portfolio` | [`portfolio::handler`] |
//! | `GET`  | `/resume/download` | [`resume::download`] |

pub mod config;
pub mod contacts;
pub mod error;
pub mod portfolio;
pub mod resume;
pub mod status;

pub use config::{ConfigError, CorsConfig, ServerConfig};
pub use error::ApiError;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use folio_core::{portfolio::Portfolio, store::SubmissionStore};
use tower_http::trace::TraceLayer;

use resume::ResumeFile;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// Nothing here is mutable; the store handles its own concurrency.
#[derive(Clone)]
pub struct AppState<S: SubmissionStore> {
  pub store:     Arc<S>,
  pub portfolio: Arc<Portfolio>,
  pub resume:    Arc<ResumeFile>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router: API routes under the configured prefix,
/// wrapped in request tracing and the configured CORS policy.
pub fn router<S>(state: AppState<S>, config: &ServerConfig) -> Result<Router, ConfigError>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
{
  let prefix = config.normalized_prefix();
  let at = |path: &str| format!("{prefix}{path}");

  let mut api = Router::new()
    .route(&at("/"), get(portfolio::root))
    .route(&at("/status"), get(status::list::<S>).post(status::create::<S>))
    .route(&at("/contact"), post(contacts::submit::<S>))
    .route(&at("/portfolio"), get(portfolio::handler::<S>))
    .route(&at("/resume/download"), get(resume::download::<S>));

  // `/api` as well as `/api/` for the root greeting.
  if !prefix.is_empty() {
    api = api.route(&prefix, get(portfolio::root));
  }

  if config.expose_contacts {
    api = api.route(&at("/contacts"), get(contacts::list::<S>));
  }

  Ok(
    api
      .with_state(state)
      .layer(config.cors.layer()?)
      .layer(TraceLayer::new_for_http()),
  )
}

#[cfg(test)]
mod tests;

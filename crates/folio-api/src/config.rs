//! Runtime configuration, deserialised from `config.toml` and `FOLIO_*`
//! environment variables.

use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid CORS origin {0:?}")]
  InvalidOrigin(String),
}

// ─── Server ──────────────────────────────────────────────────────────────────

/// Top-level server configuration. Every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  /// Path prefix every route is mounted under, e.g. `/api`. Empty mounts at
  /// the root.
  pub api_prefix:      String,
  pub store_path:      PathBuf,
  pub resume_path:     PathBuf,
  /// File name offered to the browser in `Content-Disposition`.
  pub resume_filename: String,
  /// Replacement portfolio document; the embedded one is used when unset.
  pub portfolio_path:  Option<PathBuf>,
  /// Mount the unauthenticated `GET /contacts` listing.
  pub expose_contacts: bool,
  pub cors:            CorsConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            "0.0.0.0".to_owned(),
      port:            8000,
      api_prefix:      "/api".to_owned(),
      store_path:      PathBuf::from("folio.db"),
      resume_path:     PathBuf::from("static/Pavitra_Byali_Resume.pdf"),
      resume_filename: "Pavitra_Byali_Resume.pdf".to_owned(),
      portfolio_path:  None,
      expose_contacts: true,
      cors:            CorsConfig::default(),
    }
  }
}

impl ServerConfig {
  /// `host:port` suitable for [`tokio::net::TcpListener::bind`].
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The API prefix with a leading slash and no trailing slash; empty when
  /// routes are mounted at the root.
  pub fn normalized_prefix(&self) -> String {
    let trimmed = self.api_prefix.trim_matches('/');
    if trimmed.is_empty() {
      String::new()
    } else {
      format!("/{trimmed}")
    }
  }
}

// ─── CORS ────────────────────────────────────────────────────────────────────

/// Cross-origin policy.
///
/// The defaults (`*` with credentials) accept any origin. Tighten this for
/// production by listing explicit origins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
  pub allowed_origins:   Vec<String>,
  pub allow_credentials: bool,
}

impl Default for CorsConfig {
  fn default() -> Self {
    Self { allowed_origins: vec!["*".to_owned()], allow_credentials: true }
  }
}

impl CorsConfig {
  fn is_wildcard(&self) -> bool { self.allowed_origins.iter().any(|o| o == "*") }

  fn origin_list(&self) -> Result<AllowOrigin, ConfigError> {
    let origins = self
      .allowed_origins
      .iter()
      .map(|o| {
        HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.clone()))
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(AllowOrigin::list(origins))
  }

  /// Build the [`CorsLayer`] for this policy.
  ///
  /// A literal `*` cannot be combined with credentials on the wire, so a
  /// wildcard policy with credentials echoes the request's origin, method,
  /// and headers back instead.
  pub fn layer(&self) -> Result<CorsLayer, ConfigError> {
    let layer = match (self.is_wildcard(), self.allow_credentials) {
      (true, true) => CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true),
      (false, true) => CorsLayer::new()
        .allow_origin(self.origin_list()?)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true),
      (true, false) => CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any),
      (false, false) => CorsLayer::new()
        .allow_origin(self.origin_list()?)
        .allow_methods(Any)
        .allow_headers(Any),
    };
    Ok(layer)
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

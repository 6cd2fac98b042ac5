//! Error types for `folio-core`.
//!
//! Form validation reports through [`crate::validate::ValidationErrors`]
//! instead; this enum covers loading the static configuration data.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read portfolio document {path:?}: {source}")]
  PortfolioRead {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

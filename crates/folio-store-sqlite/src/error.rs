//! Error type for `folio-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// The insert completed without writing a row.
  #[error("insert into {0} was not acknowledged")]
  NotAcknowledged(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

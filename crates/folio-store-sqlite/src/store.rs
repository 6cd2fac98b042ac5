//! [`SqliteStore`] — the SQLite implementation of [`SubmissionStore`].

use std::path::Path;

use folio_core::{
  contact::{ContactSubmission, NewContact},
  status::StatusCheck,
  store::SubmissionStore,
};
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawContact, RawStatusCheck, encode_dt, encode_uuid, now},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A folio submission store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The store is
/// opened explicitly with [`SqliteStore::open`] and released explicitly with
/// [`SqliteStore::close`].
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the connection and stop its worker thread.
  ///
  /// Every clone shares the connection; calls made through another clone
  /// after this returns fail with a database error.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SubmissionStore impl ────────────────────────────────────────────────────

impl SubmissionStore for SqliteStore {
  type Error = Error;

  // ── Contact submissions ───────────────────────────────────────────────────

  async fn record_contact(&self, input: NewContact) -> Result<ContactSubmission> {
    let submission = input.into_submission(Uuid::new_v4(), now());

    let id_str     = encode_uuid(submission.id);
    let name       = submission.name.clone();
    let email      = submission.email.clone();
    let subject    = submission.subject.clone();
    let message    = submission.message.clone();
    let at_str     = encode_dt(submission.timestamp);
    let status_str = submission.status.as_str().to_owned();

    let inserted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "INSERT INTO contacts (id, name, email, subject, message, timestamp, status)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![id_str, name, email, subject, message, at_str, status_str],
        )?;
        Ok(n)
      })
      .await?;

    if inserted != 1 {
      return Err(Error::NotAcknowledged("contacts"));
    }
    Ok(submission)
  }

  async fn list_contacts(&self, limit: usize) -> Result<Vec<ContactSubmission>> {
    let limit_val = i64::try_from(limit).unwrap_or(i64::MAX);

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, email, subject, message, timestamp, status
           FROM contacts
           ORDER BY timestamp DESC, rowid DESC
           LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_submission).collect()
  }

  // ── Status checks ─────────────────────────────────────────────────────────

  async fn record_status_check(&self, client_name: String) -> Result<StatusCheck> {
    let check = StatusCheck {
      id: Uuid::new_v4(),
      client_name,
      timestamp: now(),
    };

    let id_str = encode_uuid(check.id);
    let name   = check.client_name.clone();
    let at_str = encode_dt(check.timestamp);

    let inserted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "INSERT INTO status_checks (id, client_name, timestamp) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, name, at_str],
        )?;
        Ok(n)
      })
      .await?;

    if inserted != 1 {
      return Err(Error::NotAcknowledged("status_checks"));
    }
    Ok(check)
  }

  async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>> {
    let limit_val = i64::try_from(limit).unwrap_or(i64::MAX);

    let raws: Vec<RawStatusCheck> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, client_name, timestamp FROM status_checks ORDER BY rowid LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val], RawStatusCheck::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawStatusCheck::into_status_check).collect()
  }
}

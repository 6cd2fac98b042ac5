//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 UTC strings with microsecond
//! precision, so lexical order in SQL matches chronological order. UUIDs are
//! stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Timelike as _, Utc};
use folio_core::{
  contact::{ContactStatus, ContactSubmission},
  status::StatusCheck,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// Current time truncated to the precision the store keeps, so a record
/// returned from an insert compares equal to the same record read back.
pub fn now() -> DateTime<Utc> {
  let now = Utc::now();
  now
    .with_nanosecond(now.timestamp_subsec_micros() * 1_000)
    .unwrap_or(now)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub id:        String,
  pub name:      String,
  pub email:     String,
  pub subject:   String,
  pub message:   String,
  pub timestamp: String,
  pub status:    String,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:        row.get(0)?,
      name:      row.get(1)?,
      email:     row.get(2)?,
      subject:   row.get(3)?,
      message:   row.get(4)?,
      timestamp: row.get(5)?,
      status:    row.get(6)?,
    })
  }

  pub fn into_submission(self) -> Result<ContactSubmission> {
    Ok(ContactSubmission {
      id:        decode_uuid(&self.id)?,
      name:      self.name,
      email:     self.email,
      subject:   self.subject,
      message:   self.message,
      timestamp: decode_dt(&self.timestamp)?,
      status:    ContactStatus::from(self.status),
    })
  }
}

/// Raw strings read directly from a `status_checks` row.
pub struct RawStatusCheck {
  pub id:          String,
  pub client_name: String,
  pub timestamp:   String,
}

impl RawStatusCheck {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      client_name: row.get(1)?,
      timestamp:   row.get(2)?,
    })
  }

  pub fn into_status_check(self) -> Result<StatusCheck> {
    Ok(StatusCheck {
      id:          decode_uuid(&self.id)?,
      client_name: self.client_name,
      timestamp:   decode_dt(&self.timestamp)?,
    })
  }
}

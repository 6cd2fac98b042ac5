//! SQL schema for the folio SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The implicit `rowid` is the storage identifier. It is never exposed; only
/// the application-level `id` column leaves the store.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Submissions are append-only from this service's point of view.
-- External consumers may rewrite `status`; nothing here does.
CREATE TABLE IF NOT EXISTS contacts (
    id         TEXT NOT NULL UNIQUE,
    name       TEXT NOT NULL,
    email      TEXT NOT NULL,
    subject    TEXT NOT NULL,
    message    TEXT NOT NULL,
    timestamp  TEXT NOT NULL,   -- RFC 3339 UTC, fixed width; server-assigned
    status     TEXT NOT NULL DEFAULT 'new'
);

CREATE TABLE IF NOT EXISTS status_checks (
    id          TEXT NOT NULL UNIQUE,
    client_name TEXT NOT NULL,
    timestamp   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS contacts_timestamp_idx ON contacts(timestamp);

PRAGMA user_version = 1;
";

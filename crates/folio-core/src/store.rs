//! The `SubmissionStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `folio-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  contact::{ContactSubmission, NewContact},
  status::StatusCheck,
};

/// Maximum number of submissions returned by a listing. This is a fixed
/// retrieval cap; there is no pagination beyond it.
pub const CONTACT_LIST_LIMIT: usize = 1000;

/// Maximum number of status checks returned by a listing.
pub const STATUS_LIST_LIMIT: usize = 1000;

/// Abstraction over the persistence collaborator.
///
/// Every write is a single atomic insert: a record is either fully stored or
/// not stored at all. Nothing is ever updated or deleted through this trait.
/// Reads are not guaranteed to observe writes that race with them.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait SubmissionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Contact submissions ───────────────────────────────────────────────

  /// Persist a validated submission and return the stored record.
  /// The `id` and `timestamp` are assigned by the store.
  fn record_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<ContactSubmission, Self::Error>> + Send + '_;

  /// Return up to `limit` submissions, most recent first.
  fn list_contacts(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<ContactSubmission>, Self::Error>> + Send + '_;

  // ── Status checks ─────────────────────────────────────────────────────

  /// Append a heartbeat for `client_name`.
  fn record_status_check(
    &self,
    client_name: String,
  ) -> impl Future<Output = Result<StatusCheck, Self::Error>> + Send + '_;

  /// Return up to `limit` heartbeats in insertion order.
  fn list_status_checks(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<StatusCheck>, Self::Error>> + Send + '_;
}

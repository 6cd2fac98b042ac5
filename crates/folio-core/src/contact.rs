//! Contact-form submissions.
//!
//! A submission is an immutable record: once the store has written it, no
//! field is ever updated by this system. Validation happens entirely before
//! the store is touched, so a rejected form never produces a partial write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{ValidationErrors, check_email, check_text};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Reply returned to the submitter on success.
pub const THANK_YOU_MESSAGE: &str =
  "Thank you for your message! I'll get back to you soon.";

// ─── Status ──────────────────────────────────────────────────────────────────

/// Lifecycle tag of a stored submission.
///
/// This service only ever writes [`ContactStatus::New`]. Other tags may be
/// set by external consumers of the store and are carried through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContactStatus {
  #[default]
  New,
  Other(String),
}

impl ContactStatus {
  pub fn as_str(&self) -> &str {
    match self {
      Self::New => "new",
      Self::Other(s) => s,
    }
  }
}

impl From<String> for ContactStatus {
  fn from(s: String) -> Self {
    if s == "new" { Self::New } else { Self::Other(s) }
  }
}

impl From<ContactStatus> for String {
  fn from(status: ContactStatus) -> Self {
    match status {
      ContactStatus::New => "new".to_owned(),
      ContactStatus::Other(s) => s,
    }
  }
}

// ─── Stored record ───────────────────────────────────────────────────────────

/// A persisted contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
  pub id:        Uuid,
  pub name:      String,
  pub email:     String,
  pub subject:   String,
  pub message:   String,
  /// Server-assigned receipt time; never taken from the client.
  pub timestamp: DateTime<Utc>,
  pub status:    ContactStatus,
}

// ─── Inbound form ────────────────────────────────────────────────────────────

/// The raw contact-form body as sent by a client.
///
/// Every field is optional here so that a missing field surfaces as a
/// field-level validation error rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub subject: Option<String>,
  pub message: Option<String>,
}

impl ContactForm {
  /// Apply every field rule and return a [`NewContact`] if all pass.
  pub fn validate(self) -> Result<NewContact, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let name = check_text(&mut errors, "name", self.name, MAX_NAME_LEN);
    let email = check_email(&mut errors, "email", self.email);
    let subject =
      check_text(&mut errors, "subject", self.subject, MAX_SUBJECT_LEN);
    let message =
      check_text(&mut errors, "message", self.message, MAX_MESSAGE_LEN);

    match (name, email, subject, message) {
      (Some(name), Some(email), Some(subject), Some(message)) => {
        Ok(NewContact { name, email, subject, message })
      }
      _ => Err(errors),
    }
  }
}

// ─── NewContact ──────────────────────────────────────────────────────────────

/// A submission that has passed validation.
///
/// Only obtainable through [`ContactForm::validate`]; input to
/// [`crate::store::SubmissionStore::record_contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  name:    String,
  email:   String,
  subject: String,
  message: String,
}

impl NewContact {
  /// Assemble the stored record. Status always starts as `new`.
  pub fn into_submission(
    self,
    id: Uuid,
    timestamp: DateTime<Utc>,
  ) -> ContactSubmission {
    ContactSubmission {
      id,
      name: self.name,
      email: self.email,
      subject: self.subject,
      message: self.message,
      timestamp,
      status: ContactStatus::New,
    }
  }
}

/// Body returned by a successful intake. Rejections carry a `detail` body
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
  pub success: bool,
  pub message: String,
}

impl ContactReceipt {
  pub fn accepted() -> Self {
    Self { success: true, message: THANK_YOU_MESSAGE.to_owned() }
  }
}

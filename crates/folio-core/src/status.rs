//! Status checks — an additive heartbeat log written by clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{MSG_REQUIRED, ValidationErrors};

/// A single heartbeat record. Never updated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
  pub id:          Uuid,
  pub client_name: String,
  pub timestamp:   DateTime<Utc>,
}

/// Raw `POST /status` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusCheckForm {
  pub client_name: Option<String>,
}

impl StatusCheckForm {
  /// Return the client name, or a validation error if it is absent.
  pub fn validate(self) -> Result<String, ValidationErrors> {
    self
      .client_name
      .ok_or_else(|| ValidationErrors::single("client_name", MSG_REQUIRED))
  }
}

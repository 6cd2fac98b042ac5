//! Field-level validation for inbound forms.
//!
//! Validation collects every violated field rather than stopping at the first,
//! so a caller can highlight all problems in one round trip.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A single rule violation, keyed by the offending field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field:   String,
  pub message: String,
}

/// A non-empty collection of [`FieldError`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
  pub fn new() -> Self { Self::default() }

  /// A collection holding exactly one error.
  pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
    let mut errors = Self::new();
    errors.push(field, message);
    errors
  }

  pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
    self.0.push(FieldError { field: field.into(), message: message.into() });
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn errors(&self) -> &[FieldError] { &self.0 }

  /// Whether any error was recorded against `field`.
  pub fn has_field(&self, field: &str) -> bool {
    self.0.iter().any(|e| e.field == field)
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, e) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{}: {}", e.field, e.message)?;
    }
    Ok(())
  }
}

impl std::error::Error for ValidationErrors {}

// ─── Rules ───────────────────────────────────────────────────────────────────

pub const MSG_REQUIRED: &str = "field required";
pub const MSG_EMPTY: &str = "must be at least 1 character";
pub const MSG_INVALID_EMAIL: &str = "value is not a valid email address";

/// Check that `value` is present and between 1 and `max` characters long,
/// returning it only when it passes.
///
/// Length is measured in Unicode scalar values, not bytes. The value is not
/// trimmed: a single space is one character.
pub fn check_text(
  errors: &mut ValidationErrors,
  field: &str,
  value: Option<String>,
  max: usize,
) -> Option<String> {
  let Some(v) = value else {
    errors.push(field, MSG_REQUIRED);
    return None;
  };
  let len = v.chars().count();
  if len == 0 {
    errors.push(field, MSG_EMPTY);
    None
  } else if len > max {
    errors.push(field, format!("must be at most {max} characters"));
    None
  } else {
    Some(v)
  }
}

/// Check that `value` is present and is a syntactically valid address,
/// returning it only when it passes.
pub fn check_email(
  errors: &mut ValidationErrors,
  field: &str,
  value: Option<String>,
) -> Option<String> {
  match value {
    None => {
      errors.push(field, MSG_REQUIRED);
      None
    }
    Some(v) if !is_valid_email(&v) => {
      errors.push(field, MSG_INVALID_EMAIL);
      None
    }
    Some(v) => Some(v),
  }
}

// ─── Email syntax ────────────────────────────────────────────────────────────

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;

/// RFC 5322 `atext` plus the dot separator, extended with the non-ASCII
/// characters RFC 6531 allows. Whitespace and control characters never match.
static LOCAL_PART: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]|[^\x00-\x7F\s\p{Cc}])+$")
    .expect("local-part pattern is valid")
});

/// Two or more LDH labels, each 1–63 characters without edge hyphens.
/// Matched against the ASCII (punycode) form of the domain.
static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$",
  )
  .expect("domain pattern is valid")
});

/// Whether `address` is a syntactically valid `local@domain` email address.
///
/// Internationalised domains are checked in their IDNA ASCII form, and the
/// final label must not be all digits.
pub fn is_valid_email(address: &str) -> bool {
  let Some((local, domain)) = address.split_once('@') else {
    return false;
  };

  let local_len = local.chars().count();
  let local_ok = local_len > 0
    && local_len <= MAX_LOCAL_LEN
    && !local.starts_with('.')
    && !local.ends_with('.')
    && !local.contains("..")
    && LOCAL_PART.is_match(local);
  if !local_ok {
    return false;
  }

  let Ok(ascii) = idna::domain_to_ascii(domain) else {
    return false;
  };
  let tld_ok = ascii
    .rsplit('.')
    .next()
    .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()));

  !ascii.is_empty()
    && ascii.len() <= MAX_DOMAIN_LEN
    && local_len + 1 + ascii.len() <= MAX_EMAIL_LEN
    && tld_ok
    && DOMAIN.is_match(&ascii)
}

//! The static portfolio document.
//!
//! This is configuration data, not business logic. A default document is
//! compiled into the binary; deployments may point at a replacement JSON file
//! with the same shape. The document never touches the submission store.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const EMBEDDED: &str = include_str!("../data/portfolio.json");

// ─── Personal info ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerGoals {
  pub target_role:    String,
  pub interest_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
  /// Legal or full name.
  pub name:         String,
  /// Name shown in headings.
  pub display_name: String,
  pub title:        String,
  pub tagline:      String,
  pub location:     String,
  pub email:        String,
  pub phone:        String,
  pub linkedin:     String,
  pub github:       String,
  pub bio:          String,
  pub career_goals: CareerGoals,
}

// ─── Skills ──────────────────────────────────────────────────────────────────

/// Skill lists grouped by area, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSkills {
  pub languages:     Vec<String>,
  pub frontend:      Vec<String>,
  pub backend:       Vec<String>,
  pub frameworks:    Vec<String>,
  pub databases:     Vec<String>,
  pub cloud_dev_ops: Vec<String>,
  pub tools:         Vec<String>,
  pub deployment:    Vec<String>,
  pub others:        Vec<String>,
}

// ─── Listings ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
  pub id:       u32,
  pub title:    String,
  pub provider: String,
  /// Free-form completion date, e.g. "October 2024".
  pub date:     String,
  pub status:   String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
  pub id:           u32,
  pub title:        String,
  pub description:  String,
  pub technologies: Vec<String>,
  pub github:       String,
  pub features:     Vec<String>,
  pub status:       String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
  pub name: String,
  pub url:  String,
  /// Icon identifier understood by the frontend.
  pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
  pub name: String,
  pub href: String,
}

// ─── Document ────────────────────────────────────────────────────────────────

/// The full portfolio document served by `GET /portfolio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
  pub personal_info:    PersonalInfo,
  pub technical_skills: TechnicalSkills,
  pub certifications:   Vec<Certification>,
  pub projects:         Vec<Project>,
  pub social_links:     Vec<SocialLink>,
  pub navigation:       Vec<NavItem>,
}

impl Portfolio {
  /// The document compiled into the binary.
  pub fn embedded() -> Result<Self> { Self::from_json(EMBEDDED) }

  /// Parse a document from a JSON string.
  pub fn from_json(json: &str) -> Result<Self> { Ok(serde_json::from_str(json)?) }

  /// Load a replacement document from disk.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| {
      Error::PortfolioRead { path: path.to_path_buf(), source }
    })?;
    Self::from_json(&json)
  }
}

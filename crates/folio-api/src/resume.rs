//! Handler for `GET /resume/download`.

use std::{io, path::PathBuf};

use axum::{
  body::Body,
  extract::State,
  http::{StatusCode, header},
  response::Response,
};
use folio_core::store::SubmissionStore;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::{AppState, error::ApiError};

pub const NOT_FOUND_MESSAGE: &str =
  "Resume file not found. Please contact the administrator.";

/// Where the résumé lives and what the browser should call it.
#[derive(Debug, Clone)]
pub struct ResumeFile {
  pub path:     PathBuf,
  pub filename: String,
}

impl ResumeFile {
  fn content_disposition(&self) -> String {
    let name: String = self
      .filename
      .chars()
      .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
      .collect();
    format!("attachment; filename=\"{name}\"")
  }
}

/// `GET /resume/download` — streams the PDF, or 404 if it is absent.
pub async fn download<S>(
  State(state): State<AppState<S>>,
) -> Result<Response, ApiError>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
{
  let resume = &state.resume;

  let file = match File::open(&resume.path).await {
    Ok(f) => f,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      return Err(ApiError::NotFound(NOT_FOUND_MESSAGE.to_owned()));
    }
    Err(e) => return Err(ApiError::internal(e)),
  };

  let meta = file.metadata().await.map_err(ApiError::internal)?;
  if !meta.is_file() {
    return Err(ApiError::NotFound(NOT_FOUND_MESSAGE.to_owned()));
  }

  Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, "application/pdf")
    .header(header::CONTENT_DISPOSITION, resume.content_disposition())
    .header(header::CONTENT_LENGTH, meta.len())
    .body(Body::from_stream(ReaderStream::new(file)))
    .map_err(ApiError::internal)
}

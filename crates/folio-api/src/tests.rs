//! Router-level tests against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Method, Request, StatusCode, header},
};
use folio_core::{
  portfolio::Portfolio,
  store::{CONTACT_LIST_LIMIT, STATUS_LIST_LIMIT},
};
use folio_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt as _;

use crate::{AppState, ServerConfig, error::INTERNAL_MESSAGE, resume::ResumeFile, router};

struct Harness {
  store:  SqliteStore,
  config: ServerConfig,
  dir:    TempDir,
}

impl Harness {
  async fn new() -> Self {
    Self {
      store:  SqliteStore::open_in_memory().await.unwrap(),
      config: ServerConfig::default(),
      dir:    tempfile::tempdir().unwrap(),
    }
  }

  fn resume_path(&self) -> std::path::PathBuf { self.dir.path().join("resume.pdf") }

  fn app(&self) -> Router {
    let state = AppState {
      store:     Arc::new(self.store.clone()),
      portfolio: Arc::new(Portfolio::embedded().unwrap()),
      resume:    Arc::new(ResumeFile {
        path:     self.resume_path(),
        filename: "Jane_Doe_Resume.pdf".to_string(),
      }),
    };
    router(state, &self.config).unwrap()
  }

  async fn send(
    &self,
    method: Method,
    uri: &str,
    headers: Vec<(header::HeaderName, &str)>,
    body: Body,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    for (k, v) in headers {
      builder = builder.header(k, v);
    }
    self.app().oneshot(builder.body(body).unwrap()).await.unwrap()
  }

  async fn get(&self, uri: &str) -> axum::response::Response {
    self.send(Method::GET, uri, vec![], Body::empty()).await
  }

  async fn post_json(&self, uri: &str, body: &Value) -> axum::response::Response {
    self
      .send(
        Method::POST,
        uri,
        vec![(header::CONTENT_TYPE, "application/json")],
        Body::from(body.to_string()),
      )
      .await
  }
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
  axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap()
    .to_vec()
}

async fn body_json(resp: axum::response::Response) -> Value {
  serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

fn john() -> Value {
  json!({
    "name": "John Smith",
    "email": "john.smith@example.com",
    "subject": "Portfolio Inquiry",
    "message": "Hi, I came across your portfolio and would like to connect."
  })
}

/// POST `body` through an already-built router, for bulk seeding.
async fn post_to(app: &Router, uri: &str, body: &Value) -> StatusCode {
  let req = Request::builder()
    .method(Method::POST)
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap();
  app.clone().oneshot(req).await.unwrap().status()
}

fn string_column(list: &Value, key: &str) -> Vec<String> {
  list
    .as_array()
    .unwrap()
    .iter()
    .map(|v| v[key].as_str().unwrap().to_owned())
    .collect()
}

fn error_fields(body: &Value) -> Vec<String> {
  body["detail"]
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["field"].as_str().unwrap().to_owned())
    .collect()
}

// ── Root ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn root_greets_with_and_without_trailing_slash() {
  let h = Harness::new().await;
  for uri in ["/api/", "/api"] {
    let resp = h.get(uri).await;
    assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    assert_eq!(body_json(resp).await, json!({ "message": "Hello World" }));
  }
}

// ── Contact intake ───────────────────────────────────────────────────────────

#[tokio::test]
async fn valid_submission_is_acknowledged_and_listed() {
  let h = Harness::new().await;

  let resp = h.post_json("/api/contact", &john()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(
    body_json(resp).await,
    json!({
      "success": true,
      "message": "Thank you for your message! I'll get back to you soon."
    })
  );

  let resp = h.get("/api/contacts").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let list = body_json(resp).await;
  let list = list.as_array().unwrap();
  assert_eq!(list.len(), 1);

  let stored = &list[0];
  for key in ["name", "email", "subject", "message"] {
    assert_eq!(stored[key], john()[key], "{key}");
  }
  assert_eq!(stored["status"], "new");
  assert!(stored["id"].as_str().is_some_and(|id| id.len() == 36));
  assert!(stored["timestamp"].is_string());
  assert!(stored.get("_id").is_none());
  assert!(stored.get("rowid").is_none());
}

#[tokio::test]
async fn invalid_email_is_rejected_without_persisting() {
  let h = Harness::new().await;
  let mut body = john();
  body["email"] = json!("invalid-email-format");

  let resp = h.post_json("/api/contact", &body).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  assert_eq!(error_fields(&body_json(resp).await), ["email"]);

  let list = body_json(h.get("/api/contacts").await).await;
  assert_eq!(list, json!([]));
}

#[tokio::test]
async fn missing_name_and_message_are_both_reported() {
  let h = Harness::new().await;
  let body = json!({
    "email": "john.smith@example.com",
    "subject": "Portfolio Inquiry"
  });

  let resp = h.post_json("/api/contact", &body).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let fields = error_fields(&body_json(resp).await);
  assert!(fields.contains(&"name".to_owned()));
  assert!(fields.contains(&"message".to_owned()));
}

#[tokio::test]
async fn overlong_message_is_rejected() {
  let h = Harness::new().await;
  let mut body = john();
  body["message"] = json!("x".repeat(2001));

  let resp = h.post_json("/api/contact", &body).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  assert_eq!(error_fields(&body_json(resp).await), ["message"]);
}

#[tokio::test]
async fn malformed_body_is_a_validation_error() {
  let h = Harness::new().await;
  let resp = h
    .send(
      Method::POST,
      "/api/contact",
      vec![(header::CONTENT_TYPE, "application/json")],
      Body::from("{not json"),
    )
    .await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  assert_eq!(error_fields(&body_json(resp).await), ["body"]);
}

#[tokio::test]
async fn contacts_are_listed_most_recent_first() {
  let h = Harness::new().await;
  for subject in ["first", "second", "third"] {
    let mut body = john();
    body["subject"] = json!(subject);
    let resp = h.post_json("/api/contact", &body).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  let list = body_json(h.get("/api/contacts").await).await;
  assert_eq!(string_column(&list, "subject"), ["third", "second", "first"]);
}

#[tokio::test]
async fn contacts_listing_keeps_only_the_newest() {
  let h = Harness::new().await;
  let app = h.app();
  for i in 0..=CONTACT_LIST_LIMIT {
    let mut body = john();
    body["subject"] = json!(format!("inquiry {i}"));
    assert_eq!(post_to(&app, "/api/contact", &body).await, StatusCode::OK);
  }

  let list = body_json(h.get("/api/contacts").await).await;
  let subjects = string_column(&list, "subject");
  assert_eq!(subjects.len(), CONTACT_LIST_LIMIT);
  assert_eq!(subjects[0], format!("inquiry {CONTACT_LIST_LIMIT}"));
  assert_eq!(subjects[CONTACT_LIST_LIMIT - 1], "inquiry 1");
  assert!(!subjects.iter().any(|s| s == "inquiry 0"));
}

#[tokio::test]
async fn store_failure_returns_generic_500() {
  let h = Harness::new().await;
  let app = h.app();
  h.store.clone().close().await.unwrap();

  let req = Request::builder()
    .method(Method::POST)
    .uri("/api/contact")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(john().to_string()))
    .unwrap();
  let resp = app.oneshot(req).await.unwrap();

  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body = body_json(resp).await;
  assert_eq!(body, json!({ "detail": INTERNAL_MESSAGE }));
  assert!(!body.to_string().contains("john.smith@example.com"));
}

#[tokio::test]
async fn contacts_listing_can_be_disabled() {
  let mut h = Harness::new().await;
  h.config.expose_contacts = false;

  let resp = h.get("/api/contacts").await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  // Intake is unaffected.
  let resp = h.post_json("/api/contact", &john()).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

// ── Status checks ────────────────────────────────────────────────────────────

#[tokio::test]
async fn status_checks_are_recorded_and_listed() {
  let h = Harness::new().await;

  let resp = h.post_json("/api/status", &json!({ "client_name": "uptime-monitor" })).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let created = body_json(resp).await;
  assert_eq!(created["client_name"], "uptime-monitor");
  assert!(created["id"].is_string());
  assert!(created["timestamp"].is_string());

  let list = body_json(h.get("/api/status").await).await;
  assert_eq!(list, json!([created]));
}

#[tokio::test]
async fn status_listing_keeps_the_earliest() {
  let h = Harness::new().await;
  let app = h.app();
  for i in 0..=STATUS_LIST_LIMIT {
    let body = json!({ "client_name": format!("client {i}") });
    assert_eq!(post_to(&app, "/api/status", &body).await, StatusCode::OK);
  }

  let list = body_json(h.get("/api/status").await).await;
  let names = string_column(&list, "client_name");
  assert_eq!(names.len(), STATUS_LIST_LIMIT);
  assert_eq!(names[0], "client 0");
  assert_eq!(names[STATUS_LIST_LIMIT - 1], format!("client {}", STATUS_LIST_LIMIT - 1));
  assert!(!names.contains(&format!("client {STATUS_LIST_LIMIT}")));
}

#[tokio::test]
async fn status_check_requires_client_name() {
  let h = Harness::new().await;
  let resp = h.post_json("/api/status", &json!({})).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  assert_eq!(error_fields(&body_json(resp).await), ["client_name"]);
}

// ── Portfolio ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn portfolio_has_every_section() {
  let h = Harness::new().await;
  let resp = h.get("/api/portfolio").await;
  assert_eq!(resp.status(), StatusCode::OK);

  let doc = body_json(resp).await;
  for section in [
    "personalInfo",
    "technicalSkills",
    "certifications",
    "projects",
    "socialLinks",
    "navigation",
  ] {
    assert!(doc.get(section).is_some(), "missing {section}");
  }
  for field in ["name", "displayName", "title", "email", "linkedin", "github"] {
    assert!(doc["personalInfo"][field].is_string(), "missing personalInfo.{field}");
  }
}

// ── Résumé ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn resume_missing_returns_404() {
  let h = Harness::new().await;
  let resp = h.get("/api/resume/download").await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(
    body_json(resp).await,
    json!({ "detail": "Resume file not found. Please contact the administrator." })
  );
}

#[tokio::test]
async fn resume_present_is_streamed_as_pdf() {
  let h = Harness::new().await;
  let pdf = b"%PDF-1.4\n% test document\n%%EOF\n";
  std::fs::write(h.resume_path(), pdf).unwrap();

  let resp = h.get("/api/resume/download").await;
  assert_eq!(resp.status(), StatusCode::OK);

  let headers = resp.headers();
  assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
  assert_eq!(
    headers[header::CONTENT_DISPOSITION],
    "attachment; filename=\"Jane_Doe_Resume.pdf\""
  );
  assert_eq!(headers[header::CONTENT_LENGTH], pdf.len().to_string().as_str());
  assert_eq!(body_bytes(resp).await, pdf);
}

#[tokio::test]
async fn resume_path_pointing_at_directory_is_404() {
  let h = Harness::new().await;
  std::fs::create_dir(h.resume_path()).unwrap();
  let resp = h.get("/api/resume/download").await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Routing and CORS ─────────────────────────────────────────────────────────

#[tokio::test]
async fn custom_prefix_moves_every_route() {
  let mut h = Harness::new().await;
  h.config.api_prefix = "/v1".into();

  assert_eq!(h.get("/v1/portfolio").await.status(), StatusCode::OK);
  assert_eq!(h.get("/api/portfolio").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wildcard_cors_mirrors_origin_with_credentials() {
  let h = Harness::new().await;
  let resp = h
    .send(
      Method::GET,
      "/api/portfolio",
      vec![(header::ORIGIN, "https://portfolio.example")],
      Body::empty(),
    )
    .await;

  let headers = resp.headers();
  assert_eq!(
    headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
    "https://portfolio.example"
  );
  assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn cors_preflight_allows_requested_method_and_headers() {
  let h = Harness::new().await;
  let resp = h
    .send(
      Method::OPTIONS,
      "/api/contact",
      vec![
        (header::ORIGIN, "https://portfolio.example"),
        (header::ACCESS_CONTROL_REQUEST_METHOD, "POST"),
        (header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"),
      ],
      Body::empty(),
    )
    .await;

  assert_eq!(resp.status(), StatusCode::OK);
  let headers = resp.headers();
  assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
  assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
}

#[tokio::test]
async fn explicit_origin_list_rejects_others() {
  let mut h = Harness::new().await;
  h.config.cors.allowed_origins = vec!["https://allowed.example".into()];

  let resp = h
    .send(
      Method::GET,
      "/api/portfolio",
      vec![(header::ORIGIN, "https://other.example")],
      Body::empty(),
    )
    .await;
  assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

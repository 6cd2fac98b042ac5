//! folio-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) overlaid with
//! `FOLIO_*` environment variables, opens the SQLite store, and serves the
//! portfolio API over HTTP until Ctrl-C or SIGTERM.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use folio_api::{AppState, ServerConfig, config::expand_tilde, resume::ResumeFile};
use folio_core::portfolio::Portfolio;
use folio_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Portfolio backend server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Print the resolved configuration as JSON and exit.
  #[arg(long)]
  check_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(
      config::Environment::with_prefix("FOLIO")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins"),
    )
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  if cli.check_config {
    println!("{}", serde_json::to_string_pretty(&server_cfg)?);
    return Ok(());
  }

  let portfolio = match &server_cfg.portfolio_path {
    Some(path) => Portfolio::from_path(expand_tilde(path)),
    None => Portfolio::embedded(),
  }
  .context("failed to load portfolio document")?;

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(path = ?store_path, "store opened");

  let state = AppState {
    store:     Arc::new(store.clone()),
    portfolio: Arc::new(portfolio),
    resume:    Arc::new(ResumeFile {
      path:     expand_tilde(&server_cfg.resume_path),
      filename: server_cfg.resume_filename.clone(),
    }),
  };

  let app = folio_api::router(state, &server_cfg).context("invalid configuration")?;
  let address = server_cfg.address();

  tracing::info!(
    prefix = %server_cfg.normalized_prefix(),
    expose_contacts = server_cfg.expose_contacts,
    "Listening on http://{address}"
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  store.close().await.context("failed to close store")?;
  tracing::info!("store closed");

  Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where that exists.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl+C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };
  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => tracing::info!("Received Ctrl+C shutdown signal"),
    () = terminate => tracing::info!("Received SIGTERM shutdown signal"),
  }
}

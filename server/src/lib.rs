mod backend;
mod config;
mod routes;

use std::sync::OnceLock;

use axum::Router;
use tracing_subscriber::EnvFilter;
use types::{Result, err};

pub use crate::backend::BackendClient;
pub use crate::config::Config;

static BACKEND: OnceLock<BackendClient> = OnceLock::new();

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,marketdesk=debug,server=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads configuration, prepares the backend client and returns the extra
/// axum routes served next to the app.
pub fn init() -> Result<Router> {
    let config = Config::load()?;
    tracing::info!(backend_url = %config.backend_url, "using marketplace backend");

    let client = BackendClient::from_config(&config)?;
    if BACKEND.set(client).is_err() {
        tracing::debug!("backend client already initialised");
    }

    Ok(routes::router())
}

/// The process-wide backend client. Fails until [`init`] has run.
pub fn backend() -> Result<&'static BackendClient> {
    BACKEND
        .get()
        .ok_or_else(|| err!("backend client is not initialised").with_status(503))
}

use axum::{Router, http::StatusCode, routing::get};

pub fn router() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the backend client exists; does not call the backend.
async fn readyz() -> (StatusCode, &'static str) {
    match crate::backend() {
        Ok(_) => (StatusCode::OK, "ready"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "backend not configured"),
    }
}

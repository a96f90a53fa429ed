use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::document_store;
use crate::state::AppState;

/// GET /health
/// Returns service version and which data sources are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portfolio-api",
        "sources": state.resolver.configured_sources(),
        "document_store": document_store::handle().map(|store| store.project_id()),
    }))
}

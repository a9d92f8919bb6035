use axum::{response::Json, routing::get, Router};
use serde_json::json;

use super::AppState;

pub const ROUTES: &[(&str, &str)] = &[("GET", "/health")];

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Carzone API is healthy"
    }))
}

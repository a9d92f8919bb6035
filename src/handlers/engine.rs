use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Engine, EngineRequest};
use crate::service::EngineService;

use super::extract::{AppJson, AppPath};
use super::AppState;

/// Routes served by [`router`], relative to the `/engine` mount point.
pub const ROUTES: &[(&str, &str)] = &[
    ("POST", "/"),
    ("GET", "/{id}"),
    ("PUT", "/{id}"),
    ("DELETE", "/{id}"),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_engine))
        .route(
            "/{id}",
            get(get_engine_by_id).put(update_engine).delete(delete_engine),
        )
}

async fn get_engine_by_id(
    State(service): State<EngineService>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Engine>, AppError> {
    Ok(Json(service.get_engine_by_id(id).await?))
}

// Engine creation answers 200, not 201.
async fn create_engine(
    State(service): State<EngineService>,
    AppJson(req): AppJson<EngineRequest>,
) -> Result<Json<Engine>, AppError> {
    Ok(Json(service.create_engine(&req).await?))
}

async fn update_engine(
    State(service): State<EngineService>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<EngineRequest>,
) -> Result<Json<Engine>, AppError> {
    Ok(Json(service.update_engine(id, &req).await?))
}

async fn delete_engine(
    State(service): State<EngineService>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Engine>, AppError> {
    Ok(Json(service.delete_engine(id).await?))
}

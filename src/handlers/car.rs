use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarQuery, CarRequest};
use crate::service::CarService;

use super::extract::{AppJson, AppPath, AppQuery};
use super::AppState;

/// Routes served by [`router`], relative to the `/cars` mount point.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("POST", "/"),
    ("GET", "/{id}"),
    ("PUT", "/{id}"),
    ("DELETE", "/{id}"),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cars_by_brand).post(create_car))
        .route("/{id}", get(get_car_by_id).put(update_car).delete(delete_car))
}

async fn get_car_by_id(
    State(service): State<CarService>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(service.get_car_by_id(id).await?))
}

async fn get_cars_by_brand(
    State(service): State<CarService>,
    AppQuery(query): AppQuery<CarQuery>,
) -> Result<Json<Vec<Car>>, AppError> {
    let include_engine = query.include_engine();
    tracing::debug!(
        "{} Listing cars for brand '{}' (engine: {})",
        API_NAME,
        query.brand,
        include_engine
    );

    let cars = service.get_cars_by_brand(&query.brand, include_engine).await?;
    Ok(Json(cars))
}

async fn create_car(
    State(service): State<CarService>,
    AppJson(req): AppJson<CarRequest>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let car = service.create_car(&req).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn update_car(
    State(service): State<CarService>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<CarRequest>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(service.update_car(id, &req).await?))
}

async fn delete_car(
    State(service): State<CarService>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(service.delete_car(id).await?))
}

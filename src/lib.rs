//! CRUD HTTP backend for car and engine records.
//!
//! Requests flow handler → service → store. Stores are injected into the
//! services as trait objects, so the same router runs over PostgreSQL
//! ([`repository::CarRepository`], [`repository::EngineRepository`]) or the
//! in-process [`repository::MemoryStore`].

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use handlers::{car, engine, health, AppState};

const CARS_PREFIX: &str = "/cars";
const ENGINE_PREFIX: &str = "/engine";

/// Method and full path of every route mounted by [`create_router`].
pub fn routes() -> Vec<(&'static str, String)> {
    let mounted = [
        ("", health::ROUTES),
        (CARS_PREFIX, car::ROUTES),
        (ENGINE_PREFIX, engine::ROUTES),
    ];

    mounted
        .into_iter()
        .flat_map(|(prefix, table)| {
            table.iter().map(move |&(method, path)| {
                // A nested "/" is served at the bare prefix.
                let full = match (prefix, path) {
                    ("", path) => path.to_string(),
                    (prefix, "/") => prefix.to_string(),
                    (prefix, path) => format!("{}{}", prefix, path),
                };
                (method, full)
            })
        })
        .collect()
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest(CARS_PREFIX, car::router())
        .nest(ENGINE_PREFIX, engine::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

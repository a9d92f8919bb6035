pub mod car;
pub mod engine;
pub mod extract;
pub mod health;

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::repository::{CarRepository, CarStore, EngineRepository, EngineStore};
use crate::service::{CarService, EngineService};

#[derive(Clone)]
pub struct AppState {
    pub cars: CarService,
    pub engines: EngineService,
}

impl AppState {
    pub fn new(cars: Arc<dyn CarStore>, engines: Arc<dyn EngineStore>) -> Self {
        Self {
            cars: CarService::new(cars),
            engines: EngineService::new(engines),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(CarRepository::new(pool.clone())),
            Arc::new(EngineRepository::new(pool)),
        )
    }
}

impl FromRef<AppState> for CarService {
    fn from_ref(state: &AppState) -> Self {
        state.cars.clone()
    }
}

impl FromRef<AppState> for EngineService {
    fn from_ref(state: &AppState) -> Self {
        state.engines.clone()
    }
}

use std::sync::Arc;

use uuid::Uuid;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarRequest};
use crate::repository::{CarStore, StoreError};
use crate::validation::validate_car;

#[derive(Clone)]
pub struct CarService {
    store: Arc<dyn CarStore>,
}

impl CarService {
    pub fn new(store: Arc<dyn CarStore>) -> Self {
        Self { store }
    }

    pub async fn get_car_by_id(&self, id: Uuid) -> Result<Car, AppError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| StoreError::car_not_found(id).into())
    }

    pub async fn get_cars_by_brand(
        &self,
        brand: &str,
        include_engine: bool,
    ) -> Result<Vec<Car>, AppError> {
        Ok(self.store.get_by_brand(brand, include_engine).await?)
    }

    pub async fn create_car(&self, req: &CarRequest) -> Result<Car, AppError> {
        validate_car(req)?;

        let car = self.store.create(req).await?;
        tracing::info!("{} Created car: {} ({} {})", API_NAME, car.id, car.brand, car.name);
        Ok(car)
    }

    pub async fn update_car(&self, id: Uuid, req: &CarRequest) -> Result<Car, AppError> {
        validate_car(req)?;

        let car = self.store.update(id, req).await?;
        tracing::info!("{} Updated car: {}", API_NAME, id);
        Ok(car)
    }

    pub async fn delete_car(&self, id: Uuid) -> Result<Car, AppError> {
        let car = self.store.delete(id).await?;
        tracing::info!("{} Deleted car: {}", API_NAME, id);
        Ok(car)
    }
}

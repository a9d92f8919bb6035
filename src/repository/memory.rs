//! In-process implementation of both store traits.
//!
//! Mirrors the Postgres stores: the engine reference is checked on every car
//! write, engines still referenced by a car cannot be deleted, and each
//! operation holds the write lock for its whole body so it is atomic with
//! respect to other callers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CarStore, EngineStore, StoreError};
use crate::models::{Car, CarRequest, Engine, EngineRequest};

#[derive(Default)]
struct Tables {
    engines: HashMap<Uuid, Engine>,
    // Stored without the joined engine; hydrated on read.
    cars: HashMap<Uuid, Car>,
}

impl Tables {
    fn hydrate(&self, car: &Car) -> Car {
        let mut car = car.clone();
        car.engine = self.engines.get(&car.engine_id).cloned();
        car
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn car_count(&self) -> usize {
        self.tables.read().await.cars.len()
    }
}

#[async_trait]
impl EngineStore for MemoryStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Engine>, StoreError> {
        Ok(self.tables.read().await.engines.get(&id).cloned())
    }

    async fn create(&self, req: &EngineRequest) -> Result<Engine, StoreError> {
        let engine = Engine::from_request(Uuid::new_v4(), req);
        self.tables
            .write()
            .await
            .engines
            .insert(engine.engine_id, engine.clone());
        Ok(engine)
    }

    async fn update(&self, id: Uuid, req: &EngineRequest) -> Result<Engine, StoreError> {
        let mut tables = self.tables.write().await;
        let engine = tables
            .engines
            .get_mut(&id)
            .ok_or_else(|| StoreError::engine_not_found(id))?;
        *engine = Engine::from_request(id, req);
        Ok(engine.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Engine, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.engines.contains_key(&id) {
            return Err(StoreError::engine_not_found(id));
        }
        if tables.cars.values().any(|car| car.engine_id == id) {
            return Err(StoreError::EngineInUse { engine_id: id });
        }
        tables
            .engines
            .remove(&id)
            .ok_or_else(|| StoreError::engine_not_found(id))
    }
}

#[async_trait]
impl CarStore for MemoryStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Car>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.cars.get(&id).map(|car| tables.hydrate(car)))
    }

    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> Result<Vec<Car>, StoreError> {
        let tables = self.tables.read().await;
        let mut cars: Vec<Car> = tables
            .cars
            .values()
            .filter(|car| car.brand == brand)
            .map(|car| {
                if include_engine {
                    tables.hydrate(car)
                } else {
                    car.clone()
                }
            })
            .collect();
        cars.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(cars)
    }

    async fn create(&self, req: &CarRequest) -> Result<Car, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.engines.contains_key(&req.engine_id) {
            return Err(StoreError::ForeignKeyViolation {
                engine_id: req.engine_id,
            });
        }

        let now = Utc::now();
        let car = Car {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            year: req.year,
            brand: req.brand.clone(),
            fuel_type: req.fuel_type.clone(),
            engine_id: req.engine_id,
            engine: None,
            price: req.price,
            created_at: now,
            updated_at: now,
        };
        tables.cars.insert(car.id, car.clone());
        Ok(tables.hydrate(&car))
    }

    async fn update(&self, id: Uuid, req: &CarRequest) -> Result<Car, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.cars.contains_key(&id) {
            return Err(StoreError::car_not_found(id));
        }
        if !tables.engines.contains_key(&req.engine_id) {
            return Err(StoreError::ForeignKeyViolation {
                engine_id: req.engine_id,
            });
        }

        let car = tables
            .cars
            .get_mut(&id)
            .ok_or_else(|| StoreError::car_not_found(id))?;
        car.name = req.name.clone();
        car.year = req.year;
        car.brand = req.brand.clone();
        car.fuel_type = req.fuel_type.clone();
        car.engine_id = req.engine_id;
        car.price = req.price;
        car.updated_at = Utc::now();

        let car = car.clone();
        Ok(tables.hydrate(&car))
    }

    async fn delete(&self, id: Uuid) -> Result<Car, StoreError> {
        let mut tables = self.tables.write().await;
        let car = tables
            .cars
            .remove(&id)
            .ok_or_else(|| StoreError::car_not_found(id))?;
        Ok(tables.hydrate(&car))
    }
}

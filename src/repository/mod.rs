//! Persistence for cars and engines.
//!
//! Single-row reads return `Ok(None)` when the row is absent; updates and
//! deletes of a missing row return [`StoreError::NotFound`].

pub mod car_repo;
pub mod engine_repo;
pub mod errors;
pub mod memory;
pub mod tx;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Car, CarRequest, Engine, EngineRequest};

pub use car_repo::CarRepository;
pub use engine_repo::EngineRepository;
pub use errors::StoreError;
pub use memory::MemoryStore;

#[async_trait]
pub trait EngineStore: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Engine>, StoreError>;

    /// Assigns a fresh identifier and returns the row as stored.
    async fn create(&self, req: &EngineRequest) -> Result<Engine, StoreError>;

    async fn update(&self, id: Uuid, req: &EngineRequest) -> Result<Engine, StoreError>;

    /// Returns the snapshot of the deleted row. Fails with
    /// [`StoreError::EngineInUse`] while any car references the engine.
    async fn delete(&self, id: Uuid) -> Result<Engine, StoreError>;
}

#[async_trait]
pub trait CarStore: Send + Sync {
    /// Fetches a car with its engine left-joined.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Car>, StoreError>;

    /// Lists cars of a brand. Engine details are joined only when
    /// `include_engine` is set; otherwise `Car::engine` is always `None`.
    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> Result<Vec<Car>, StoreError>;

    /// Inserts a car in a transaction. A missing engine yields
    /// [`StoreError::ForeignKeyViolation`] and nothing is written.
    async fn create(&self, req: &CarRequest) -> Result<Car, StoreError>;

    async fn update(&self, id: Uuid, req: &CarRequest) -> Result<Car, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<Car, StoreError>;
}

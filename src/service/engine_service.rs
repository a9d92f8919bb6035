use std::sync::Arc;

use uuid::Uuid;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Engine, EngineRequest};
use crate::repository::{EngineStore, StoreError};
use crate::validation::validate_engine;

#[derive(Clone)]
pub struct EngineService {
    store: Arc<dyn EngineStore>,
}

impl EngineService {
    pub fn new(store: Arc<dyn EngineStore>) -> Self {
        Self { store }
    }

    pub async fn get_engine_by_id(&self, id: Uuid) -> Result<Engine, AppError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| StoreError::engine_not_found(id).into())
    }

    pub async fn create_engine(&self, req: &EngineRequest) -> Result<Engine, AppError> {
        validate_engine(req)?;

        let engine = self.store.create(req).await?;
        tracing::info!("{} Created engine: {}", API_NAME, engine.engine_id);
        Ok(engine)
    }

    pub async fn update_engine(&self, id: Uuid, req: &EngineRequest) -> Result<Engine, AppError> {
        validate_engine(req)?;

        let engine = self.store.update(id, req).await?;
        tracing::info!("{} Updated engine: {}", API_NAME, id);
        Ok(engine)
    }

    pub async fn delete_engine(&self, id: Uuid) -> Result<Engine, AppError> {
        let engine = self.store.delete(id).await?;
        tracing::info!("{} Deleted engine: {}", API_NAME, id);
        Ok(engine)
    }
}

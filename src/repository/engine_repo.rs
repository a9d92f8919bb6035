use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::errors::map_engine_delete_error;
use super::{EngineStore, StoreError};
use crate::constants::API_NAME;
use crate::models::{Engine, EngineRequest};

const ENGINE_COLUMNS: &str = "id, displacement, no_of_cylinders, car_range";

#[derive(Clone)]
pub struct EngineRepository {
    pool: PgPool,
}

impl EngineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngineStore for EngineRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Engine>, StoreError> {
        let query = format!("SELECT {} FROM engine WHERE id = $1", ENGINE_COLUMNS);

        let engine = sqlx::query_as::<_, Engine>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(engine)
    }

    async fn create(&self, req: &EngineRequest) -> Result<Engine, StoreError> {
        let query = format!(
            "INSERT INTO engine (id, displacement, no_of_cylinders, car_range)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            ENGINE_COLUMNS
        );

        let engine = sqlx::query_as::<_, Engine>(&query)
            .bind(Uuid::new_v4())
            .bind(req.displacement)
            .bind(req.no_of_cylinders)
            .bind(req.car_range)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("{} Inserted engine: {}", API_NAME, engine.engine_id);
        Ok(engine)
    }

    async fn update(&self, id: Uuid, req: &EngineRequest) -> Result<Engine, StoreError> {
        let query = format!(
            "UPDATE engine SET displacement = $2, no_of_cylinders = $3, car_range = $4
             WHERE id = $1
             RETURNING {}",
            ENGINE_COLUMNS
        );

        sqlx::query_as::<_, Engine>(&query)
            .bind(id)
            .bind(req.displacement)
            .bind(req.no_of_cylinders)
            .bind(req.car_range)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::engine_not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<Engine, StoreError> {
        let query = format!("DELETE FROM engine WHERE id = $1 RETURNING {}", ENGINE_COLUMNS);

        let deleted = sqlx::query_as::<_, Engine>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_engine_delete_error(e, id))?;

        match deleted {
            Some(engine) => {
                tracing::debug!("{} Deleted engine: {}", API_NAME, id);
                Ok(engine)
            }
            None => Err(StoreError::engine_not_found(id)),
        }
    }
}

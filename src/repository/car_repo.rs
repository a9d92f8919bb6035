use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::errors::map_car_write_error;
use super::tx::in_transaction;
use super::{CarStore, StoreError};
use crate::constants::API_NAME;
use crate::models::{Car, CarRequest, CarRow};

const SELECT_CAR_WITH_ENGINE: &str = "SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.engine_id, c.price,
        c.created_at, c.updated_at,
        e.id AS joined_engine_id, e.displacement, e.no_of_cylinders, e.car_range
     FROM car c
     LEFT JOIN engine e ON c.engine_id = e.id";

const SELECT_CAR: &str = "SELECT id, name, year, brand, fuel_type, engine_id, price, created_at, updated_at
     FROM car";

#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn fetch_with_engine(conn: &mut PgConnection, id: Uuid) -> Result<Option<Car>, sqlx::Error> {
    let query = format!("{} WHERE c.id = $1", SELECT_CAR_WITH_ENGINE);

    let row = sqlx::query_as::<_, CarRow>(&query)
        .bind(id)
        .fetch_optional(conn)
        .await?;

    Ok(row.map(Car::from))
}

#[async_trait]
impl CarStore for CarRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Car>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Ok(fetch_with_engine(&mut *conn, id).await?)
    }

    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> Result<Vec<Car>, StoreError> {
        // The join is only paid for when the caller wants engine details.
        let query = if include_engine {
            format!("{} WHERE c.brand = $1 ORDER BY c.created_at, c.id", SELECT_CAR_WITH_ENGINE)
        } else {
            format!("{} WHERE brand = $1 ORDER BY created_at, id", SELECT_CAR)
        };

        let rows = sqlx::query_as::<_, CarRow>(&query)
            .bind(brand)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn create(&self, req: &CarRequest) -> Result<Car, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let req = req.clone();

        let car = in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                sqlx::query(
                    "INSERT INTO car (id, name, year, brand, fuel_type, engine_id, price, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
                )
                .bind(id)
                .bind(&req.name)
                .bind(req.year)
                .bind(&req.brand)
                .bind(&req.fuel_type)
                .bind(req.engine_id)
                .bind(req.price)
                .bind(now)
                .bind(now)
                .execute(&mut *conn)
                .await
                .map_err(|e| map_car_write_error(e, req.engine_id))?;

                fetch_with_engine(conn, id)
                    .await?
                    .ok_or_else(|| StoreError::car_not_found(id))
            })
        })
        .await?;

        tracing::debug!("{} Inserted car: {}", API_NAME, car.id);
        Ok(car)
    }

    async fn update(&self, id: Uuid, req: &CarRequest) -> Result<Car, StoreError> {
        let req = req.clone();

        in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let result = sqlx::query(
                    "UPDATE car
                     SET name = $2, year = $3, brand = $4, fuel_type = $5, engine_id = $6, price = $7,
                         updated_at = $8
                     WHERE id = $1",
                )
                .bind(id)
                .bind(&req.name)
                .bind(req.year)
                .bind(&req.brand)
                .bind(&req.fuel_type)
                .bind(req.engine_id)
                .bind(req.price)
                .bind(Utc::now())
                .execute(&mut *conn)
                .await
                .map_err(|e| map_car_write_error(e, req.engine_id))?;

                if result.rows_affected() == 0 {
                    return Err(StoreError::car_not_found(id));
                }

                fetch_with_engine(conn, id)
                    .await?
                    .ok_or_else(|| StoreError::car_not_found(id))
            })
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<Car, StoreError> {
        in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let snapshot = fetch_with_engine(&mut *conn, id)
                    .await?
                    .ok_or_else(|| StoreError::car_not_found(id))?;

                let result = sqlx::query("DELETE FROM car WHERE id = $1")
                    .bind(id)
                    .execute(&mut *conn)
                    .await?;

                // Row vanished between the read and the delete.
                if result.rows_affected() == 0 {
                    return Err(StoreError::car_not_found(id));
                }

                tracing::debug!("{} Deleted car: {}", API_NAME, id);
                Ok(snapshot)
            })
        })
        .await
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::Engine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub brand: String,
    pub fuel_type: String,
    pub engine_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<Engine>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CarRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 1886, max = 2100, message = "year must be between 1886 and 2100"))]
    pub year: i32,
    #[validate(length(min = 1, message = "brand must not be empty"))]
    pub brand: String,
    #[validate(length(min = 1, message = "fuel_type must not be empty"))]
    pub fuel_type: String,
    pub engine_id: Uuid,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

/// Query string of `GET /cars`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarQuery {
    #[serde(default)]
    pub brand: String,
    #[serde(rename = "isEngine")]
    pub is_engine: Option<String>,
}

impl CarQuery {
    pub fn include_engine(&self) -> bool {
        self.is_engine.as_deref() == Some("true")
    }
}

/// One row of the car table, optionally left-joined with engine. The engine
/// columns are absent from the plain query and NULL for a dangling join.
#[derive(Debug, Clone, FromRow)]
pub struct CarRow {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub brand: String,
    pub fuel_type: String,
    pub engine_id: Uuid,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(default)]
    pub joined_engine_id: Option<Uuid>,
    #[sqlx(default)]
    pub displacement: Option<i64>,
    #[sqlx(default)]
    pub no_of_cylinders: Option<i64>,
    #[sqlx(default)]
    pub car_range: Option<i64>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        let engine = match (
            row.joined_engine_id,
            row.displacement,
            row.no_of_cylinders,
            row.car_range,
        ) {
            (Some(engine_id), Some(displacement), Some(no_of_cylinders), Some(car_range)) => {
                Some(Engine {
                    engine_id,
                    displacement,
                    no_of_cylinders,
                    car_range,
                })
            }
            _ => None,
        };

        Car {
            id: row.id,
            name: row.name,
            year: row.year,
            brand: row.brand,
            fuel_type: row.fuel_type,
            engine_id: row.engine_id,
            engine,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

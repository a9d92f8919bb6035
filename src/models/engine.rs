use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Engine {
    #[sqlx(rename = "id")]
    pub engine_id: Uuid,
    pub displacement: i64,
    pub no_of_cylinders: i64,
    pub car_range: i64,
}

impl Engine {
    pub fn from_request(engine_id: Uuid, req: &EngineRequest) -> Self {
        Self {
            engine_id,
            displacement: req.displacement,
            no_of_cylinders: req.no_of_cylinders,
            car_range: req.car_range,
        }
    }
}

/// Body of `POST /engine` and `PUT /engine/{id}`. Field order is the order
/// in which validation reports violations.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EngineRequest {
    #[validate(range(min = 1, message = "displacement must be greater than zero"))]
    pub displacement: i64,
    #[serde(alias = "noOfCylinders", alias = "noOfCyclinders")]
    #[validate(range(min = 1, message = "no_of_cylinders must be greater than zero"))]
    pub no_of_cylinders: i64,
    #[serde(alias = "carRange")]
    #[validate(range(min = 1, message = "car_range must be greater than zero"))]
    pub car_range: i64,
}

pub mod car;
pub mod engine;

pub use car::{Car, CarQuery, CarRequest, CarRow};
pub use engine::{Engine, EngineRequest};

pub mod car_service;
pub mod engine_service;

pub use car_service::CarService;
pub use engine_service::EngineService;

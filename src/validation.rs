//! Request checks run by the services before any store call.
//!
//! The `validator` derive collects every violation; callers only ever see the
//! first one, in field declaration order.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{CarRequest, EngineRequest};

const ENGINE_FIELDS: &[&str] = &["displacement", "no_of_cylinders", "car_range"];
const CAR_FIELDS: &[&str] = &["name", "year", "brand", "fuel_type", "price"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub field: &'static str,
    pub message: String,
}

pub fn validate_engine(req: &EngineRequest) -> Result<(), ValidationFailure> {
    req.validate()
        .map_err(|errors| first_failure(&errors, ENGINE_FIELDS))
}

pub fn validate_car(req: &CarRequest) -> Result<(), ValidationFailure> {
    req.validate().map_err(|errors| first_failure(&errors, CAR_FIELDS))
}

fn first_failure(errors: &ValidationErrors, order: &[&'static str]) -> ValidationFailure {
    let field_errors = errors.field_errors();

    for &field in order {
        if let Some(failure) = field_errors.get(field).and_then(|errs| errs.first()) {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            return ValidationFailure { field, message };
        }
    }

    ValidationFailure {
        field: "request",
        message: errors.to_string(),
    }
}

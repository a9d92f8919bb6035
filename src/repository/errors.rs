use thiserror::Error;
use uuid::Uuid;

/// Postgres SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("engine_id '{engine_id}' does not exist in the engine table")]
    ForeignKeyViolation { engine_id: Uuid },

    #[error("engine '{engine_id}' is still referenced by at least one car")]
    EngineInUse { engine_id: Uuid },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn car_not_found(id: Uuid) -> Self {
        StoreError::NotFound { entity: "car", id }
    }

    pub fn engine_not_found(id: Uuid) -> Self {
        StoreError::NotFound { entity: "engine", id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        return db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION);
    }
    false
}

/// Maps a constraint failure on a car write to the integrity error, leaving
/// every other database error untouched.
pub fn map_car_write_error(err: sqlx::Error, engine_id: Uuid) -> StoreError {
    if is_foreign_key_violation(&err) {
        StoreError::ForeignKeyViolation { engine_id }
    } else {
        StoreError::Database(err)
    }
}

pub fn map_engine_delete_error(err: sqlx::Error, engine_id: Uuid) -> StoreError {
    if is_foreign_key_violation(&err) {
        StoreError::EngineInUse { engine_id }
    } else {
        StoreError::Database(err)
    }
}

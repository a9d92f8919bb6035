use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

use super::StoreError;
use crate::constants::API_NAME;

/// Runs `body` inside a transaction borrowed from `pool`.
///
/// The transaction is committed if `body` returns `Ok` and rolled back if it
/// returns `Err`. Both paths consume the transaction, so finalization happens
/// exactly once. If the caller's future is dropped mid-body (request
/// cancelled), the unfinished transaction rolls back when it is dropped.
pub async fn in_transaction<T, F>(pool: &PgPool, body: F) -> Result<T, StoreError>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, StoreError>> + Send,
{
    let mut tx = pool.begin().await?;

    let outcome = body(&mut *tx).await;

    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("{} Rollback failed after '{}': {}", API_NAME, err, rollback_err);
            } else {
                tracing::debug!("{} Transaction rolled back: {}", API_NAME, err);
            }
            Err(err)
        }
    }
}

use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::constants::API_NAME;

/// Opens the pool and waits for the database to answer `SELECT 1`, retrying
/// with a linear backoff while it starts up.
pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let mut retries = 0;

    loop {
        let attempt = async {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            sqlx::query("SELECT 1").execute(&pool).await?;
            Ok::<_, sqlx::Error>(pool)
        }
        .await;

        match attempt {
            Ok(pool) => return Ok(pool),
            Err(e) if retries < config.connect_retries => {
                retries += 1;
                let delay = Duration::from_millis(500 * u64::from(retries));
                tracing::warn!(
                    "{} Database not ready (attempt {}/{}): {}. Retrying in {:?}",
                    API_NAME,
                    retries,
                    config.connect_retries,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to connect to database after {} retries", retries)
                })
            }
        }
    }
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;
    Ok(())
}

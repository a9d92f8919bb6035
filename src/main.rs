use std::net::SocketAddr;

use carzone::config::Config;
use carzone::constants::API_NAME;
use carzone::handlers::AppState;
use carzone::{create_router, db, routes};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if dotenvy::dotenv().is_err() {
        eprintln!("No .env file found, using process environment");
    }

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Carzone server on port {}", API_NAME, config.server_port);

    let pool = db::connect(&config).await?;
    tracing::info!("{} Connected to database", API_NAME);

    db::migrate(&pool).await?;
    tracing::info!("{} Database schema applied", API_NAME);

    let app = create_router(AppState::postgres(pool.clone()));
    for (method, path) in routes() {
        tracing::info!("{} Registered route: {} {}", API_NAME, method, path);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("{} Database connection closed", API_NAME);

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("{} Failed to listen for Ctrl-C: {}", API_NAME, e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("{} Failed to listen for SIGTERM: {}", API_NAME, e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("{} Shutdown signal received", API_NAME);
}

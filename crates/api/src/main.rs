use std::net::SocketAddr;
use std::sync::Arc;

use ludoteca_core::GameRepository;
use ludoteca_db::repositories::{InMemoryGameRepository, PgGameRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ludoteca_api::config::ServerConfig;
use ludoteca_api::router::build_app_router;
use ludoteca_api::state::{AppState, StorageKind};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ludoteca_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Storage ---
    let (repository, storage) = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = ludoteca_db::create_pool(database_url, config.db_max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            ludoteca_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            ludoteca_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            (
                Arc::new(PgGameRepository::new(pool)) as Arc<dyn GameRepository>,
                StorageKind::Postgres,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, games are kept in memory only");
            (
                Arc::new(InMemoryGameRepository::new()) as Arc<dyn GameRepository>,
                StorageKind::Memory,
            )
        }
    };

    // --- Router ---
    let state = AppState::new(repository, storage, config.clone());
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, ?storage, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

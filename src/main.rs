//! Contacts API server: loads `.env`, prepares storage, mounts all routes.

use contacts_api::{
    app, ensure_database_exists, ensure_schema, AppState, InMemoryContactRepository, PgContactRepository,
    ServerConfig, StorageBackend,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contacts_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = match config.storage {
        StorageBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_schema(&pool).await?;
            AppState::new(PgContactRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; contacts are lost on exit");
            AppState::new(InMemoryContactRepository::new())
        }
    };

    let router = app(state, config.max_body_bytes);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

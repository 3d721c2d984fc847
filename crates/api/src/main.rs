mod config;
mod error;
mod middleware;
mod routes;
mod state;

use std::sync::Arc;

use landing_forge_core::generation::{OpenRouterClient, OpenRouterConfig};
use landing_forge_core::store::{IdeaStore, MemoryIdeaStore, PgIdeaStore};
use landing_forge_core::IdeaService;
use sqlx::postgres::PgPoolOptions;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    let config = config::AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting landing-forge API server");

    let store: Arc<dyn IdeaStore> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .min_connections(config.db_min_connections)
                .connect(url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to database: {e}"))?;
            tracing::info!("Connected to PostgreSQL");

            sqlx::migrate!("../../migrations")
                .run(&pool)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;
            tracing::info!("Database migrations applied");

            Arc::new(PgIdeaStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; ideas are kept in memory and lost on restart");
            Arc::new(MemoryIdeaStore::new())
        }
    };

    let model = OpenRouterClient::new(OpenRouterConfig {
        endpoint: config.openrouter_url.clone(),
        api_key: config.openrouter_api_key.clone(),
        referer: config.openrouter_referer.clone(),
        timeout: config.model_timeout,
    })
    .map_err(|e| anyhow::anyhow!("Failed to build model client: {e}"))?;

    let ideas = IdeaService::new(Arc::new(model), store, config.default_model.clone());
    let state = state::AppState::new(ideas, config.clone());

    let app = routes::build_router(state)
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(middleware::request_tracing::trace_layer())
        .layer(middleware::cors::cors_layer(&config.cors_allowed_origins));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("Received Ctrl+C, shutting down..."); }
        _ = terminate => { tracing::info!("Received SIGTERM, shutting down..."); }
    }
}

use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::contact_query::{
    repository::mock::MemoryContactQueryRepository, ContactPolicy, ContactQueryRepository,
    SeaOrmContactQueryRepository,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// `STORAGE=memory` keeps records in process; anything else uses Postgres.
fn use_memory_storage() -> bool {
    std::env::var("STORAGE").map(|v| v.eq_ignore_ascii_case("memory")).unwrap_or(false)
}

/// Connect the configured store and run migrations.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let policy = ContactPolicy::from(&cfg.contacts);
    let repo: Arc<dyn ContactQueryRepository> = if use_memory_storage() {
        warn!("STORAGE=memory: contact queries are not persisted");
        Arc::new(MemoryContactQueryRepository::new())
    } else {
        let db = models::db::connect_with_config(&cfg.database).await?;
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Runtime(format!("migrate up: {e}")))?;
        Arc::new(SeaOrmContactQueryRepository::new(db))
    };
    info!(
        default_limit = policy.default_limit,
        max_limit = policy.max_limit,
        lock_solved = policy.lock_solved,
        "contact query service ready"
    );
    Ok(ServerState::new(repo, policy))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, draining connections");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let state = build_state(&cfg).await?;

    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

//! Backend entry-point: loads settings, prepares storage and serves the
//! people REST API.

mod server;

use std::io::Write;

use actix_web::web;
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use people_service::inbound::http::health::HealthState;
use people_service::outbound::persistence::{
    DbPool, MigrationError, PoolError, run_pending_migrations,
};
use server::{ServerConfig, ServerSettings, create_server};

/// Failures that stop the service before it starts serving.
#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to load settings: {0}")]
    Settings(String),
    #[error("invalid bind address: {0}")]
    BindAddr(#[from] std::net::AddrParseError),
    #[error("failed to apply migrations: {0}")]
    Migrations(#[from] MigrationError),
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

async fn build_server_config(settings: &ServerSettings) -> Result<ServerConfig, StartupError> {
    let config = ServerConfig::new(settings.bind_addr()?);
    let Some(pool_config) = settings.pool_config() else {
        return Ok(config);
    };

    if settings.run_migrations() {
        run_pending_migrations(pool_config.database_url()).await?;
    }
    let pool = DbPool::new(pool_config).await?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        // Without a subscriber, tracing events go nowhere.
        let _ = writeln!(std::io::stderr(), "tracing init failed: {e}");
    }

    let settings =
        ServerSettings::load().map_err(|err| StartupError::Settings(err.to_string()))?;
    let config = build_server_config(&settings).await?;
    let bind_addr = config.bind_addr;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "people service listening");
    server.await?;
    Ok(())
}

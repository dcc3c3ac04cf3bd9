//! HTTP server initialization and runtime setup.
//!
//! Connects the database pool, applies migrations, builds the outbound HTTP
//! gateways and serves the router until shutdown.

use crate::config::Config;
use crate::infrastructure::http::{HttpUrlLiveness, IpApiGeoLocator, build_client};
use crate::infrastructure::persistence::{PgRedirectRepository, PgVisitRepository};
use crate::routes::app_router;
use crate::state::{AppState, StateOptions};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Creates the connection pool described by `config`.
///
/// # Errors
///
/// Returns an error if the database cannot be reached.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The outbound HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    let client = build_client().context("Failed to build HTTP client")?;

    let pool = Arc::new(pool);
    let redirect_repository = Arc::new(PgRedirectRepository::new(pool.clone()));
    let visit_repository = Arc::new(PgVisitRepository::new(pool));
    let geo_locator = Arc::new(IpApiGeoLocator::new(
        client.clone(),
        &config.geolocation_url,
        config.geolocation_timeout(),
    ));
    let url_liveness = Arc::new(HttpUrlLiveness::new(client, config.url_check_timeout()));

    let state = AppState::new(
        redirect_repository,
        visit_repository,
        geo_locator,
        url_liveness,
        StateOptions::from(&config),
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

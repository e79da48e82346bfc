//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection (with bounded retry), schema bootstrap,
//! and the Axum server lifecycle. All startup failures are returned as
//! errors; only the binary decides to exit.

use crate::config::Config;
use crate::infrastructure::persistence::{PgLinkRepository, ensure_schema};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result, anyhow};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Maximum number of connection attempts before startup fails.
const CONNECT_MAX_ATTEMPTS: usize = 5;
/// Fixed delay between connection attempts.
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(3);
/// Timeout applied to each individual connection attempt.
const CONNECT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(3);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (bounded retry, see [`connect_with_retry`])
/// - The `urls` table (idempotent `CREATE TABLE IF NOT EXISTS`)
/// - Axum HTTP server
///
/// The process must not serve without verified connectivity: both the
/// connection and the schema bootstrap are fatal on failure.
///
/// # Errors
///
/// Returns an error if:
/// - The database is unreachable after all retries
/// - Schema creation fails
/// - Server bind fails or a server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_with_retry(&config.database_url).await?;
    tracing::info!("Connected to database");

    ensure_schema(&pool)
        .await
        .context("Failed to create urls table")?;

    let repository = Arc::new(PgLinkRepository::new(pool));
    let state = AppState::new(repository);

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Connects to PostgreSQL with a fixed-interval bounded retry.
///
/// Up to [`CONNECT_MAX_ATTEMPTS`] attempts, [`CONNECT_RETRY_DELAY`] apart,
/// each capped at [`CONNECT_ATTEMPT_TIMEOUT`]. `PgPool::connect` verifies
/// connectivity by acquiring a connection, so a returned pool is a live one.
///
/// # Errors
///
/// Returns the last attempt's error once the retry budget is exhausted.
async fn connect_with_retry(database_url: &str) -> Result<PgPool> {
    let strategy = FixedInterval::new(CONNECT_RETRY_DELAY).take(CONNECT_MAX_ATTEMPTS - 1);
    let attempts = AtomicUsize::new(0);

    Retry::spawn(strategy, || {
        let attempt = attempts.fetch_add(1, Ordering::Relaxed) + 1;

        async move {
            let connect = PgPoolOptions::new().connect(database_url);

            match tokio::time::timeout(CONNECT_ATTEMPT_TIMEOUT, connect).await {
                Ok(Ok(pool)) => Ok(pool),
                Ok(Err(e)) => {
                    tracing::warn!(
                        "database not reachable (attempt {}/{}): {}",
                        attempt,
                        CONNECT_MAX_ATTEMPTS,
                        e
                    );
                    Err(anyhow!(e))
                }
                Err(_) => {
                    tracing::warn!(
                        "database connection timed out (attempt {}/{})",
                        attempt,
                        CONNECT_MAX_ATTEMPTS
                    );
                    Err(anyhow!("connection attempt timed out"))
                }
            }
        }
    })
    .await
    .context("Database not reachable after retries")
}

//! # gardend — garden services daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Open the `SQLite` document store and run migrations, or fall back to an
//!   uninitialised store when none is configured or reachable
//! - Construct application services, injecting the store via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use garden_adapter_http_axum::router;
use garden_adapter_http_axum::state::AppState;
use garden_adapter_storage_sqlite_sqlx::SqliteDocumentStore;
use garden_app::services::diagnostics_service::DiagnosticsService;
use garden_app::services::record_service::RecordService;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Store
    let store = open_store(&config).await;

    // Services
    let record_service = RecordService::new(store.clone());
    let diagnostics_service = DiagnosticsService::new(store, config.presence());

    // HTTP
    let app = router::build(AppState::new(record_service, diagnostics_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "gardend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("gardend stopped");
    Ok(())
}

/// Open the configured store. The server still starts without one.
async fn open_store(config: &Config) -> Option<SqliteDocumentStore> {
    let Some(database_url) = config.database_url() else {
        tracing::warn!("DATABASE_URL and DATABASE_NAME not set, starting without storage");
        return None;
    };

    let storage = garden_adapter_storage_sqlite_sqlx::Config { database_url };
    match storage.build().await {
        Ok(db) => Some(SqliteDocumentStore::new(db.pool().clone())),
        Err(err) => {
            tracing::error!(error = ?err, "failed to open database, starting without storage");
            None
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

//! Serve command - Seeds the store and starts the HTTP server.

use std::sync::Arc;

use tokio::signal;

use common::{AppError, AppResult};

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::RecordsServiceConfig;
use crate::infra::Database;
use crate::seed::{self, JsonFileSource};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: RecordsServiceConfig) -> AppResult<()> {
    if let Some(host) = args.host {
        config.service.host = host;
    }
    if let Some(port) = args.port {
        config.service.port = port;
    }
    if let Some(dir) = args.seed_dir {
        config.seed_dir = dir;
    }

    tracing::info!("Starting {}...", config.service.service_name);

    // Initialize database
    let db = Database::connect(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    // Load seed data before accepting traffic
    if args.no_seed {
        tracing::info!("Seeding skipped");
    } else {
        let source = JsonFileSource::new(config.seed_dir.clone());
        tracing::info!("Loading seed files from {}", source.dir().display());
        seed::load(db.connection(), &source)
            .await
            .map_err(|e| AppError::internal(format!("Seeding failed: {}", e)))?;
    }

    let db = Arc::new(db);
    let app = create_router(AppState::from_database(db.clone()));

    // Start server
    let addr = config.service.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close()
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}

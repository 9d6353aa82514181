//! Migrate command - Database migration management.

use common::{AppError, AppResult};

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::RecordsServiceConfig;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: RecordsServiceConfig) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    if config.database.is_in_memory() {
        tracing::warn!("Migrating an in-memory database; changes vanish on exit");
    }

    match args.action {
        MigrateAction::Up => {
            let applied = db
                .apply_pending()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Applied {} migration(s)", applied);
        }
        MigrateAction::Down { steps } => {
            db.rollback(steps)
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Rolled back {} migration(s)", steps);
        }
        MigrateAction::Status => {
            let status = db
                .migration_status()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            for migration in status {
                let marker = if migration.applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, migration.name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every table and re-applying all migrations");
            db.reset()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
        }
    }

    db.close()
        .await
        .map_err(|e| AppError::internal(e.to_string()))
}

//! Seed command - Loads seed files without serving.

use common::{AppError, AppResult};

use crate::cli::args::SeedArgs;
use crate::config::RecordsServiceConfig;
use crate::infra::Database;
use crate::seed::{self, JsonFileSource};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: RecordsServiceConfig) -> AppResult<()> {
    let dir = args.seed_dir.unwrap_or(config.seed_dir);

    if config.database.is_in_memory() {
        tracing::warn!("Seeding an in-memory database; records vanish on exit");
    }

    let db = Database::connect(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let source = JsonFileSource::new(dir);
    tracing::info!("Loading seed files from {}", source.dir().display());
    let summary = seed::load(db.connection(), &source)
        .await
        .map_err(|e| AppError::internal(format!("Seeding failed: {}", e)))?;
    println!("{}", summary);

    db.close()
        .await
        .map_err(|e| AppError::internal(e.to_string()))
}

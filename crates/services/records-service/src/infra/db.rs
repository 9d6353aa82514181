//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use common::DatabaseConfig;

use super::migrations::Migrator;

/// A migration known to the binary and whether the database has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Initialize database connection and run migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let database = Self::connect_without_migrations(config).await?;

        let applied = database.apply_pending().await?;
        tracing::info!(applied, "Database connected and schema up to date");

        Ok(database)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(connect_options(config)).await?;
        Ok(Self { connection })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply every pending migration; returns how many ran.
    pub async fn apply_pending(&self) -> Result<usize, DbErr> {
        let pending = Migrator::get_pending_migrations(&self.connection).await?.len();
        if pending > 0 {
            Migrator::up(&self.connection, None).await?;
        }
        Ok(pending)
    }

    /// Roll back the last `steps` applied migrations.
    pub async fn rollback(&self, steps: u32) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(steps)).await
    }

    /// Every known migration, oldest first, with its applied flag.
    pub async fn migration_status(&self) -> Result<Vec<MigrationState>, DbErr> {
        let migrations = Migrator::get_migration_with_status(&self.connection).await?;

        Ok(migrations
            .iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: matches!(m.status(), MigrationStatus::Applied),
            })
            .collect())
    }

    /// Drop every table, then apply all migrations again.
    pub async fn reset(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the connection pool. Other clones of the connection stop working.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.connection.clone().close().await
    }
}

/// Pool options for the configured URL.
///
/// An in-memory SQLite database exists only inside the connection that
/// created it, so the pool is pinned to one long-lived connection.
fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());

    if config.is_in_memory() {
        options.max_connections(1).min_connections(1);
    } else {
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);
    }

    if let Some(lifetime) = config.connection_lifetime() {
        options.idle_timeout(lifetime).max_lifetime(lifetime);
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_database_applies_every_migration() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        db.ping().await.unwrap();

        let status = db.migration_status().await.unwrap();
        assert_eq!(status.len(), 3);
        assert!(status.iter().all(|m| m.applied));
        assert!(status[0].name.contains("create_user_table"));

        // nothing left to apply
        assert_eq!(db.apply_pending().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rollback_marks_migrations_pending_from_the_newest() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        db.rollback(2).await.unwrap();

        let applied: Vec<bool> = db
            .migration_status()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.applied)
            .collect();
        assert_eq!(applied, vec![true, false, false]);

        assert_eq!(db.apply_pending().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn fresh_connection_without_migrations_has_everything_pending() {
        let db = Database::connect_without_migrations(&DatabaseConfig::in_memory())
            .await
            .unwrap();

        let status = db.migration_status().await.unwrap();
        assert!(status.iter().all(|m| !m.applied));

        db.reset().await.unwrap();
        assert!(db.migration_status().await.unwrap().iter().all(|m| m.applied));
    }
}

//! Records service configuration.

use std::env;
use std::path::PathBuf;

use common::{DatabaseConfig, ServiceConfig, DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Directory holding the seed files when `SEED_DIR` is unset
pub const DEFAULT_SEED_DIR: &str = "data";

/// Records service configuration.
#[derive(Debug, Clone)]
pub struct RecordsServiceConfig {
    /// Bind address and service name
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Directory with users.json, orders.json and offers.json
    pub seed_dir: PathBuf,
}

impl RecordsServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| DatabaseConfig::default().max_connections),
            min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| DatabaseConfig::default().min_connections),
        };

        Self {
            service: ServiceConfig {
                service_name: "records-service".to_string(),
                host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_SERVER_PORT),
            },
            database,
            seed_dir: env::var("SEED_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SEED_DIR)),
        }
    }
}

impl Default for RecordsServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "records-service".to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
            seed_dir: PathBuf::from(DEFAULT_SEED_DIR),
        }
    }
}

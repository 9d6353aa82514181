//! Where seed records come from.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use domain::{Offer, Order, User, OFFERS_SEED_FILE, ORDERS_SEED_FILE, USERS_SEED_FILE};

use super::SeedError;

/// A provider of the three initial record collections.
pub trait SeedSource: Send + Sync {
    fn users(&self) -> Result<Vec<User>, SeedError>;
    fn orders(&self) -> Result<Vec<Order>, SeedError>;
    fn offers(&self) -> Result<Vec<Offer>, SeedError>;
}

/// Reads `users.json`, `orders.json` and `offers.json` from a directory.
///
/// Each file holds a JSON array of objects shaped like the record.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, SeedError> {
        let path = self.dir.join(file);
        let raw = fs::read_to_string(&path).map_err(|source| SeedError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| SeedError::Parse { path, source })
    }
}

impl SeedSource for JsonFileSource {
    fn users(&self) -> Result<Vec<User>, SeedError> {
        self.read(USERS_SEED_FILE)
    }

    fn orders(&self) -> Result<Vec<Order>, SeedError> {
        self.read(ORDERS_SEED_FILE)
    }

    fn offers(&self) -> Result<Vec<Offer>, SeedError> {
        self.read(OFFERS_SEED_FILE)
    }
}

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    pub offers: Vec<Offer>,
}

impl SeedSource for StaticSource {
    fn users(&self) -> Result<Vec<User>, SeedError> {
        Ok(self.users.clone())
    }

    fn orders(&self) -> Result<Vec<Order>, SeedError> {
        Ok(self.orders.clone())
    }

    fn offers(&self) -> Result<Vec<Offer>, SeedError> {
        Ok(self.offers.clone())
    }
}

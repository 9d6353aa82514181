//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::{
    OfferRepository, OfferStore, OrderRepository, OrderStore, UserRepository, UserStore,
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserRepository>,
    pub orders: Arc<OrderRepository>,
    pub offers: Arc<OfferRepository>,
    /// Database handle, used for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Build SeaORM-backed repositories over one database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let conn = database.get_connection();

        Self {
            users: Arc::new(UserStore::new(conn.clone())),
            orders: Arc::new(OrderStore::new(conn.clone())),
            offers: Arc::new(OfferStore::new(conn)),
            database,
        }
    }
}

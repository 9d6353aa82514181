//! Seed loader - populates the store once, before traffic is accepted.
//!
//! All three collections are read and parsed first, then inserted in
//! foreign-key order (users, orders, offers) inside one transaction. Any
//! failure leaves the tables exactly as they were.

mod source;

use std::fmt;
use std::path::PathBuf;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use thiserror::Error;
use tracing::{info, warn};

use domain::{Offer, Order, User};

use crate::repository::entities::{offer, order, user};
use crate::repository::insert_all;

pub use source::{JsonFileSource, SeedSource, StaticSource};

/// Errors that abort seeding. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to store seed records: {0}")]
    Database(#[from] DbErr),
}

/// Row counts inserted per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub orders: u64,
    pub offers: u64,
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seeded {} users, {} orders, {} offers",
            self.users, self.orders, self.offers
        )
    }
}

/// Load every collection from `source` into the database.
pub async fn load(db: &DatabaseConnection, source: &dyn SeedSource) -> Result<SeedSummary, SeedError> {
    let users = source.users()?;
    let orders = source.orders()?;
    let offers = source.offers()?;

    let txn = db.begin().await?;
    match insert_collections(&txn, users, orders, offers).await {
        Ok(summary) => {
            txn.commit().await?;
            info!(
                users = summary.users,
                orders = summary.orders,
                offers = summary.offers,
                "Seed data loaded"
            );
            Ok(summary)
        }
        Err(e) => {
            if let Err(rollback) = txn.rollback().await {
                warn!("Seed rollback failed: {}", rollback);
            }
            Err(e.into())
        }
    }
}

async fn insert_collections<C: ConnectionTrait>(
    conn: &C,
    users: Vec<User>,
    orders: Vec<Order>,
    offers: Vec<Offer>,
) -> Result<SeedSummary, DbErr> {
    Ok(SeedSummary {
        users: insert_all::<user::ActiveModel, _, _>(conn, users).await?,
        orders: insert_all::<order::ActiveModel, _, _>(conn, orders).await?,
        offers: insert_all::<offer::ActiveModel, _, _>(conn, offers).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Database;
    use crate::repository::{RecordRepository, UserStore};
    use chrono::NaiveDate;
    use common::DatabaseConfig;
    use std::fs;

    fn user(id: i32) -> User {
        User {
            id,
            first_name: "Anna".to_string(),
            last_name: "Smirnova".to_string(),
            age: 30,
            email: format!("anna{}@example.com", id),
            role: "customer".to_string(),
            phone: "+79990000000".to_string(),
        }
    }

    fn order(id: i32) -> Order {
        Order {
            id,
            name: "Deliver".to_string(),
            description: "Deliver a parcel".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            price: 700,
            customer_id: 1,
            executor_id: 2,
        }
    }

    async fn database() -> DatabaseConnection {
        Database::connect(&DatabaseConfig::in_memory())
            .await
            .unwrap()
            .get_connection()
    }

    #[tokio::test]
    async fn loads_every_collection_in_order() {
        let db = database().await;
        let source = StaticSource {
            users: vec![user(1), user(2)],
            orders: vec![order(1)],
            offers: vec![Offer {
                id: 1,
                executor_id: 2,
                order_id: 1,
            }],
        };

        let summary = load(&db, &source).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                users: 2,
                orders: 1,
                offers: 1
            }
        );
    }

    #[tokio::test]
    async fn empty_source_loads_nothing() {
        let db = database().await;
        let summary = load(&db, &StaticSource::default()).await.unwrap();
        assert_eq!(summary, SeedSummary::default());
        assert_eq!(summary.to_string(), "seeded 0 users, 0 orders, 0 offers");
    }

    #[tokio::test]
    async fn storage_failure_rolls_back_earlier_tables() {
        let db = database().await;
        // offer points at an order that does not exist
        let source = StaticSource {
            users: vec![user(1), user(2)],
            orders: vec![order(1)],
            offers: vec![Offer {
                id: 1,
                executor_id: 2,
                order_id: 99,
            }],
        };

        let err = load(&db, &source).await.unwrap_err();
        assert!(matches!(err, SeedError::Database(_)));

        let users: Vec<User> = UserStore::new(db).list().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn reads_json_files_from_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("users.json"),
            r#"[{"id": 1, "first_name": "A", "last_name": "B", "age": 20,
                "email": "a@b.c", "role": "customer", "phone": "1"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("orders.json"), "[]").unwrap();
        fs::write(dir.path().join("offers.json"), "[]").unwrap();

        let source = JsonFileSource::new(dir.path());
        let users = source.users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "a@b.c");
    }

    #[tokio::test]
    async fn malformed_date_aborts_before_anything_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("users.json"),
            r#"[{"id": 1, "first_name": "A", "last_name": "B", "age": 20,
                "email": "a@b.c", "role": "customer", "phone": "1"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("orders.json"),
            r#"[{"id": 1, "name": "n", "description": "d",
                "start_date": "2024-01-15", "end_date": "01/20/2024",
                "price": 1, "customer_id": 1, "executor_id": 1}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("offers.json"), "[]").unwrap();

        let db = database().await;
        let err = load(&db, &JsonFileSource::new(dir.path())).await.unwrap_err();
        match err {
            SeedError::Parse { path, .. } => assert!(path.ends_with("orders.json")),
            other => panic!("expected parse error, got {other:?}"),
        }

        let users: Vec<User> = UserStore::new(db).list().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn bundled_data_directory_loads() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../data");
        let db = database().await;

        let summary = load(&db, &JsonFileSource::new(dir)).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                users: 4,
                orders: 2,
                offers: 3
            }
        );
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let source = JsonFileSource::new("/nonexistent/seed/dir");
        assert!(matches!(source.users(), Err(SeedError::Io { .. })));
    }
}

//! Records Service Library
//!
//! Create, read, replace and delete users, orders and offers over HTTP,
//! backed by SeaORM and seeded from JSON files at startup.
//!
//! # Layers
//!
//! - **api**: handlers, extractors, routes and OpenAPI document
//! - **repository**: SeaORM entities and the generic record store
//! - **seed**: one-shot transactional loader and its sources
//! - **infra**: connection management and migrations
//! - **cli** / **commands**: `serve`, `seed` and `migrate`
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed from ./data and serve on :5000
//! cargo run -p records-service -- serve
//!
//! # Persistent database, seeded once
//! DATABASE_URL=sqlite://records.db?mode=rwc cargo run -p records-service -- seed
//! DATABASE_URL=sqlite://records.db?mode=rwc cargo run -p records-service -- serve --no-seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;
pub mod seed;

pub use api::{create_router, AppState};
pub use config::RecordsServiceConfig;
pub use infra::Database;

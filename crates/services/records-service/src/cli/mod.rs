//! CLI module - Command-line interface for the service.
//!
//! Provides commands for:
//! - `serve` - Seed the store and start the HTTP server
//! - `seed` - Load seed files without serving
//! - `migrate` - Database migrations

pub mod args;

pub use args::{Cli, Commands};

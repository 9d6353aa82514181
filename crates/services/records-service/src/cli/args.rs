//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Records service - users, orders and offers over HTTP
#[derive(Parser, Debug)]
#[command(name = "records-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the store and start the HTTP server
    Serve(ServeArgs),

    /// Load seed files into the configured database
    Seed(SeedArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command. Unset values fall back to the environment.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding users.json, orders.json and offers.json
    #[arg(long)]
    pub seed_dir: Option<PathBuf>,

    /// Start without loading seed data (for databases seeded earlier)
    #[arg(long)]
    pub no_seed: bool,
}

/// Arguments for the seed command
#[derive(Args, Debug, Default)]
pub struct SeedArgs {
    /// Directory holding users.json, orders.json and offers.json
    #[arg(long)]
    pub seed_dir: Option<PathBuf>,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Roll back applied migrations, newest first
    Down {
        /// Number of migrations to roll back
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `SQLite` connection string; `mode=rwc` creates the file when missing
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://waitline.db?mode=rwc")]
    pub database_url: String,
}

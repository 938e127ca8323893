//! CLI subcommand implementations.

pub mod migrate;
pub mod seed;

use thiserror::Error;

/// Errors shared by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Read the database URL, falling back to the generic `DATABASE_URL`.
pub(crate) fn database_url() -> Result<String, CommandError> {
    std::env::var("SITE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CommandError::MissingEnvVar("SITE_DATABASE_URL"))
}

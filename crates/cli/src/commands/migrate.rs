//! Database migration command.
//!
//! # Environment Variables
//!
//! - `SITE_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

use sqlx::PgPool;
use tracing::info;

use super::{CommandError, database_url};

/// Run the site database migrations.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing, the connection
/// fails, or a migration fails to apply.
pub async fn run() -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    info!("Connecting to site database...");
    let pool = PgPool::connect(&database_url).await?;

    info!("Running site migrations...");
    sqlx::migrate!("../site/migrations").run(&pool).await?;

    info!("Site migrations complete");
    Ok(())
}

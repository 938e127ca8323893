//! Seed import command.
//!
//! Fetches the fixed seed-city set of coffee shops from the places provider
//! and upserts each record into the database. This is the explicit analog of
//! the original site's build-time static fetch: detail pages for seed shops
//! work even before any visitor reaches them.
//!
//! # Environment Variables
//!
//! - `SITE_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//! - `PLACES_API_KEY` - Places provider API key
//! - `SEED_LAT_LONG` / `SEED_LIMIT` - Optional seed query overrides

use sqlx::PgPool;
use tracing::info;

use coffee_compass_site::config::PlacesConfig;
use coffee_compass_site::db::ShopRepository;
use coffee_compass_site::places::PlacesClient;

use super::database_url;

/// Fetch the seed-city shops and upsert them into the database.
///
/// Upserts are create-if-absent, so re-running the command never clobbers
/// accumulated vote counts.
///
/// # Errors
///
/// Returns an error if configuration is missing, the provider fetch fails,
/// or a database operation fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let places_config = PlacesConfig::from_env()?;
    let client = PlacesClient::new(&places_config)?;

    info!("Fetching seed coffee shops from the places provider...");
    let shops = client.seed_coffee_stores().await?;
    info!(count = shops.len(), "Fetched seed coffee shops");

    let pool = PgPool::connect(&database_url()?).await?;
    let repo = ShopRepository::new(&pool);

    for shop in &shops {
        repo.upsert(shop).await?;
    }

    info!(count = shops.len(), "Seed import complete");
    Ok(())
}

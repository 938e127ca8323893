//! Shop repository for database operations.
//!
//! The `coffee_store` table is the backing store for vote counts and for
//! records persisted on first detail-page view. Records are created by
//! upsert, mutated only by vote increment, and never deleted.

use sqlx::PgPool;

use coffee_compass_core::{CoffeeShop, ShopId};

use super::RepositoryError;

/// Database row shape for a coffee shop record.
#[derive(Debug, sqlx::FromRow)]
struct ShopRow {
    id: String,
    name: String,
    img_url: Option<String>,
    address: Option<String>,
    neighborhood: Option<String>,
    voting: i64,
}

impl From<ShopRow> for CoffeeShop {
    fn from(row: ShopRow) -> Self {
        Self {
            id: ShopId::new(row.id),
            name: row.name,
            img_url: row.img_url,
            address: row.address,
            neighborhood: row.neighborhood,
            voting: row.voting,
        }
    }
}

const SHOP_COLUMNS: &str = "id, name, img_url, address, neighborhood, voting";

/// Repository for shop database operations.
pub struct ShopRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShopRepository<'a> {
    /// Create a new shop repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a shop record if one does not already exist.
    ///
    /// Idempotent: an existing record (and its vote count) is left untouched,
    /// so the detail page can call this on every first view.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(&self, shop: &CoffeeShop) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO coffee_store (id, name, img_url, address, neighborhood, voting)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO NOTHING
            ",
        )
        .bind(shop.id.as_str())
        .bind(&shop.name)
        .bind(shop.img_url.as_deref())
        .bind(shop.address.as_deref())
        .bind(shop.neighborhood.as_deref())
        .bind(shop.voting.max(0))
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Get a shop by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: &ShopId) -> Result<Option<CoffeeShop>, RepositoryError> {
        let row = sqlx::query_as::<_, ShopRow>(&format!(
            "SELECT {SHOP_COLUMNS} FROM coffee_store WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(CoffeeShop::from))
    }

    /// Increment a shop's vote count by one, returning the updated record.
    ///
    /// Returns `None` when no record exists for the id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upvote(&self, id: &ShopId) -> Result<Option<CoffeeShop>, RepositoryError> {
        let row = sqlx::query_as::<_, ShopRow>(&format!(
            r"
            UPDATE coffee_store
            SET voting = voting + 1
            WHERE id = $1
            RETURNING {SHOP_COLUMNS}
            ",
        ))
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(CoffeeShop::from))
    }
}

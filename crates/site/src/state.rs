//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::SiteConfig;
use crate::places::{PlacesClient, PlacesError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and the places client.
#[derive(Clone)]
pub struct SiteState {
    inner: Arc<SiteStateInner>,
}

struct SiteStateInner {
    config: SiteConfig,
    pool: PgPool,
    places: PlacesClient,
}

impl SiteState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the places client cannot be constructed from the
    /// configuration.
    pub fn new(config: SiteConfig, pool: PgPool) -> Result<Self, PlacesError> {
        let places = PlacesClient::new(&config.places)?;

        Ok(Self {
            inner: Arc::new(SiteStateInner {
                config,
                pool,
                places,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the places provider client.
    #[must_use]
    pub fn places(&self) -> &PlacesClient {
        &self.inner.places
    }
}

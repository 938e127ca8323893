//! Places provider client (data access layer).
//!
//! Queries the Foursquare-style places search API over `reqwest`, normalizes
//! raw records into [`CoffeeShop`] values, and caches responses with `moka`
//! (5-minute TTL). The seed-city query is fixed by configuration, never
//! user-supplied; the location-scoped query takes the visitor's coordinates.

mod conversions;
pub mod types;

pub use conversions::convert_place;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::{debug, instrument};

use coffee_compass_core::{CoffeeShop, Coordinates};

use crate::config::PlacesConfig;
use types::SearchResponse;

/// Fixed search term; the provider is only ever asked for coffee.
const COFFEE_QUERY: &str = "coffee";

/// Fields requested from the provider per record.
const SEARCH_FIELDS: &str = "fsq_id,name,location,photos";

/// Errors that can occur when interacting with the places provider.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The configured API key is not a valid header value.
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),
}

/// Client for the places search API.
///
/// Cheaply cloneable via `Arc`; search responses are cached per
/// coordinates-and-limit key.
#[derive(Clone)]
pub struct PlacesClient {
    inner: Arc<PlacesClientInner>,
}

struct PlacesClientInner {
    client: reqwest::Client,
    base_url: String,
    seed_lat_long: Coordinates,
    seed_limit: u32,
    cache: Cache<String, Vec<CoffeeShop>>,
}

impl PlacesClient {
    /// Create a new places client.
    ///
    /// # Errors
    ///
    /// Returns `PlacesError::InvalidApiKey` if the configured key cannot be
    /// used as an HTTP header value.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(config.api_key.expose_secret())
                .map_err(|e| PlacesError::InvalidApiKey(e.to_string()))?,
        );
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Ok(Self {
            inner: Arc::new(PlacesClientInner {
                client,
                base_url: config.base_url.clone(),
                seed_lat_long: config.seed_lat_long,
                seed_limit: config.seed_limit,
                cache,
            }),
        })
    }

    /// Search for coffee shops around the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns `PlacesError` if the request fails or the provider responds
    /// with a non-success status.
    #[instrument(skip(self, coords), fields(ll = %coords))]
    pub async fn search_coffee_stores(
        &self,
        coords: &Coordinates,
        limit: u32,
    ) -> Result<Vec<CoffeeShop>, PlacesError> {
        let ll = coords.to_lat_long();
        let cache_key = format!("search:{ll}:{limit}");

        if let Some(shops) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for places search");
            return Ok(shops);
        }

        let url = format!("{}/places/search", self.inner.base_url);
        let response = self
            .inner
            .client
            .get(&url)
            .query(&[
                ("query", COFFEE_QUERY),
                ("ll", ll.as_str()),
                ("limit", limit.to_string().as_str()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %message.chars().take(500).collect::<String>(),
                "Places API returned non-success status"
            );
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        let shops: Vec<CoffeeShop> = body.results.iter().map(convert_place).collect();

        self.inner.cache.insert(cache_key, shops.clone()).await;
        Ok(shops)
    }

    /// Fetch the fixed seed-city set of coffee shops.
    ///
    /// # Errors
    ///
    /// Returns `PlacesError` if the underlying search fails.
    pub async fn seed_coffee_stores(&self) -> Result<Vec<CoffeeShop>, PlacesError> {
        self.search_coffee_stores(&self.inner.seed_lat_long, self.inner.seed_limit)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_error_display() {
        let err = PlacesError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 429 - quota exceeded");
    }

    #[test]
    fn test_search_response_parses_provider_shape() {
        let body = r#"{
            "results": [
                {
                    "fsq_id": "abc123",
                    "name": "Communal Coffee",
                    "location": {"address": "2335 University Ave", "neighborhood": ["North Park"]},
                    "photos": [{"prefix": "https://img.example/", "suffix": "/p.jpg"}]
                },
                {"fsq_id": "def456", "name": "Bare Bones Cafe"}
            ]
        }"#;
        let parsed: SearchResponse =
            serde_json::from_str(body).expect("provider shape should parse");
        assert_eq!(parsed.results.len(), 2);

        let shops: Vec<CoffeeShop> = parsed.results.iter().map(convert_place).collect();
        assert_eq!(shops.first().map(|s| s.id.as_str()), Some("abc123"));
        assert!(shops.get(1).and_then(|s| s.img_url.as_ref()).is_none());
    }
}

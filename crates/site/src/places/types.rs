//! Raw response shapes from the places provider.
//!
//! These mirror the provider's JSON as loosely as the provider sends it;
//! the conversion step in [`super::conversions`] turns them into validated
//! [`coffee_compass_core::CoffeeShop`] records.

use serde::Deserialize;

/// Top-level search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceRecord>,
}

/// A single place as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRecord {
    pub fsq_id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<PlaceLocation>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
}

/// Address information for a place. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub neighborhood: Vec<String>,
}

/// A photo reference; the URL is assembled from prefix + size + suffix.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacePhoto {
    pub prefix: String,
    pub suffix: String,
}

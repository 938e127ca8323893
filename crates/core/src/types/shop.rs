//! Coffee shop records and ids.

use serde::{Deserialize, Serialize};

/// Fallback image shown for shops whose provider record carries no photo.
pub const PLACEHOLDER_IMG_URL: &str = "https://images.unsplash.com/photo-1504753793650-d4a2b783c15e?ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&ixlib=rb-1.2.1&auto=format&fit=crop&w=2000&q=80";

/// Type-safe wrapper for a coffee shop id.
///
/// Shop ids originate from the places provider and are opaque strings;
/// the wrapper prevents mixing them with other string-typed values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(String);

impl ShopId {
    /// Create a new id from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ShopId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ShopId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A coffee shop record.
///
/// Created by the seed import or implicitly on first detail-page view;
/// mutated only by vote increment; never deleted. Wire field names are
/// camelCase to match the original endpoint contracts (`imgUrl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeShop {
    pub id: ShopId,
    pub name: String,
    /// Provider photo URL; absent records render [`PLACEHOLDER_IMG_URL`].
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    /// Upvote count, never negative.
    #[serde(default)]
    pub voting: i64,
}

impl CoffeeShop {
    /// The image URL to render: the record's own, or the placeholder.
    #[must_use]
    pub fn img_url_or_placeholder(&self) -> &str {
        self.img_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMG_URL)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shop(img_url: Option<&str>) -> CoffeeShop {
        CoffeeShop {
            id: ShopId::new("abc123"),
            name: "Dark Horse Coffee".to_owned(),
            img_url: img_url.map(str::to_owned),
            address: None,
            neighborhood: None,
            voting: 0,
        }
    }

    #[test]
    fn test_missing_img_url_renders_placeholder() {
        assert_eq!(shop(None).img_url_or_placeholder(), PLACEHOLDER_IMG_URL);
    }

    #[test]
    fn test_empty_img_url_renders_placeholder() {
        assert_eq!(shop(Some("")).img_url_or_placeholder(), PLACEHOLDER_IMG_URL);
    }

    #[test]
    fn test_present_img_url_is_kept() {
        let shop = shop(Some("https://example.com/cup.jpg"));
        assert_eq!(shop.img_url_or_placeholder(), "https://example.com/cup.jpg");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(shop(Some("https://example.com/cup.jpg"))).unwrap();
        assert!(json.get("imgUrl").is_some());
        assert!(json.get("img_url").is_none());
        assert_eq!(json["voting"], 0);
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let shop: CoffeeShop =
            serde_json::from_str(r#"{"id":"x1","name":"Lofty Coffee"}"#).unwrap();
        assert_eq!(shop.id.as_str(), "x1");
        assert_eq!(shop.voting, 0);
        assert!(shop.img_url.is_none());
        assert!(shop.address.is_none());
    }
}

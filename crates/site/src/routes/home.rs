//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use coffee_compass_core::CoffeeShop;

use crate::filters;
use crate::state::SiteState;

/// Display name of the seed city shown regardless of visitor location.
pub const SEED_CITY: &str = "San Diego";

/// Shop display data for the card grid.
#[derive(Debug, Clone)]
pub struct ShopCardView {
    pub name: String,
    pub img_url: String,
    pub href: String,
}

impl From<&CoffeeShop> for ShopCardView {
    fn from(shop: &CoffeeShop) -> Self {
        Self {
            name: shop.name.clone(),
            img_url: shop.img_url_or_placeholder().to_owned(),
            href: format!("/coffee-store/{}", shop.id),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Seed-city heading.
    pub seed_city: &'static str,
    /// Statically seeded shops, shown regardless of visitor location.
    pub seed_shops: Vec<ShopCardView>,
}

/// Display the home page.
///
/// The seed section preserves the original "empty on error" policy: a failed
/// provider fetch logs the error and renders no seed cards, so an empty grid
/// is ambiguous between "no shops" and "fetch failed". The nearby section
/// starts empty and is filled by a location report to `POST /nearby`.
#[instrument(skip(state))]
pub async fn home(State(state): State<SiteState>) -> impl IntoResponse {
    let seed_shops = state.places().seed_coffee_stores().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch seed coffee shops: {e}");
            Vec::new()
        },
        |shops| shops.iter().map(ShopCardView::from).collect(),
    );

    HomeTemplate {
        seed_city: SEED_CITY,
        seed_shops,
    }
}

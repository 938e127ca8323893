//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Home page (seed city + nearby sections)
//! GET  /health                      - Health check
//! POST /nearby                      - Location report -> nearby cards fragment
//! GET  /coffee-store/{id}           - Shop detail page
//! POST /coffee-store/{id}/vote      - Upvote -> vote fragment
//!
//! # JSON API (original endpoint contracts)
//! POST /api/createCoffeeStore
//! GET  /api/getCoffeeStoresByLocation?latLong=<lat,long>&limit=<n>
//! GET  /api/getCoffeeStoreById?id=<id>
//! PUT  /api/upVoteCoffeeStorebyId
//! ```

pub mod api;
pub mod coffee_store;
pub mod home;
pub mod nearby;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::SiteState;

/// Create the JSON API router.
pub fn api_routes() -> Router<SiteState> {
    Router::new()
        .route("/createCoffeeStore", post(api::create_coffee_store))
        .route(
            "/getCoffeeStoresByLocation",
            get(api::get_coffee_stores_by_location),
        )
        .route("/getCoffeeStoreById", get(api::get_coffee_store_by_id))
        .route(
            "/upVoteCoffeeStorebyId",
            put(api::up_vote_coffee_store_by_id),
        )
}

/// Create all routes for the site.
pub fn routes() -> Router<SiteState> {
    Router::new()
        // Pages
        .route("/", get(home::home))
        .route("/coffee-store/{id}", get(coffee_store::show))
        // HTMX fragments
        .route("/nearby", post(nearby::nearby))
        .route("/coffee-store/{id}/vote", post(coffee_store::vote))
        // JSON API
        .nest("/api", api_routes())
}

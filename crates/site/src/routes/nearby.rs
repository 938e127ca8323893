//! Nearby-shops fragment handler.
//!
//! The browser requests geolocation itself and posts the outcome here as a
//! form: either a `latLong` pair or a human-readable `error`. The handler
//! runs the location tracker against the visitor's session store, issues the
//! location-scoped search, and returns the rendered card-grid fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use coffee_compass_core::{
    Action, Coordinates, LocationTracker, PositionError, PositionSource,
};

use crate::error::SiteError;
use crate::middleware::{load_store, save_store};
use crate::routes::home::ShopCardView;
use crate::state::SiteState;

/// Fixed result count for the location-scoped search.
pub const NEARBY_LIMIT: u32 = 30;

/// Outcome of the browser's geolocation request.
#[derive(Debug, Deserialize)]
pub struct LocationReport {
    #[serde(rename = "latLong")]
    pub lat_long: Option<String>,
    pub error: Option<String>,
}

/// Position source backed by a browser-reported outcome.
pub struct ReportedPosition {
    report: LocationReport,
}

impl From<LocationReport> for ReportedPosition {
    fn from(report: LocationReport) -> Self {
        Self { report }
    }
}

impl PositionSource for ReportedPosition {
    fn current_position(&mut self) -> Result<Coordinates, PositionError> {
        if let Some(message) = self.report.error.take() {
            return Err(PositionError::Unavailable(message));
        }

        match self.report.lat_long.take() {
            Some(raw) => Coordinates::parse_lat_long(&raw)
                .map_err(|e| PositionError::Unavailable(e.to_string())),
            None => Err(PositionError::Unavailable(
                "No position was reported".to_string(),
            )),
        }
    }
}

/// Nearby card-grid fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/nearby.html")]
pub struct NearbyTemplate {
    pub shops: Vec<ShopCardView>,
    pub error: Option<String>,
}

/// Handle a location report and render the nearby section.
///
/// A failed geolocation report or a failed provider search renders a
/// fragment-local error string; neither is retried.
#[instrument(skip(state, session, report))]
pub async fn nearby(
    State(state): State<SiteState>,
    session: Session,
    Form(report): Form<LocationReport>,
) -> Result<NearbyTemplate, SiteError> {
    let mut store = load_store(&session).await?;
    let mut tracker = LocationTracker::new();
    let mut source = ReportedPosition::from(report);

    tracker.track(&mut source, &mut store);

    if let Some(message) = tracker.error() {
        // Coordinates in the store are untouched on failure
        return Ok(NearbyTemplate {
            shops: Vec::new(),
            error: Some(message.to_owned()),
        });
    }

    let Some(coords) = store.state().coordinates else {
        return Ok(NearbyTemplate {
            shops: Vec::new(),
            error: Some("No position was reported".to_string()),
        });
    };

    match state.places().search_coffee_stores(&coords, NEARBY_LIMIT).await {
        Ok(shops) => {
            let views: Vec<ShopCardView> = shops.iter().map(ShopCardView::from).collect();
            store.dispatch(Action::SetCoffeeStores(shops));
            save_store(&session, store).await?;
            Ok(NearbyTemplate {
                shops: views,
                error: None,
            })
        }
        Err(e) => {
            tracing::error!("Failed to fetch nearby coffee shops: {e}");
            // The location itself resolved, so keep it for later visits
            save_store(&session, store).await?;
            Ok(NearbyTemplate {
                shops: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}

//! JSON API endpoints.
//!
//! These preserve the original backend endpoint contracts exactly: names,
//! query parameters, body shapes, and array-wrapped responses.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use coffee_compass_core::{CoffeeShop, Coordinates, ShopId};

use crate::db::ShopRepository;
use crate::error::SiteError;
use crate::routes::nearby::NEARBY_LIMIT;
use crate::state::SiteState;

/// Body for `POST /api/createCoffeeStore`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoffeeStoreRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub voting: i64,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Upsert a coffee shop record.
///
/// Presence check only: `id` and `name` are required, everything else
/// defaults. Responds with the stored record as a one-element array.
#[instrument(skip(state, body))]
pub async fn create_coffee_store(
    State(state): State<SiteState>,
    Json(body): Json<CreateCoffeeStoreRequest>,
) -> Result<Json<Vec<CoffeeShop>>, SiteError> {
    if body.id.is_empty() || body.name.is_empty() {
        return Err(SiteError::BadRequest("id and name are required".to_string()));
    }

    let shop = CoffeeShop {
        id: ShopId::new(body.id),
        name: body.name,
        img_url: body.img_url,
        address: body.address,
        neighborhood: body.neighborhood,
        voting: body.voting.max(0),
    };

    let repo = ShopRepository::new(state.pool());
    repo.upsert(&shop).await?;

    // Upsert leaves existing records untouched, so read back what is stored
    let stored = repo.get_by_id(&shop.id).await?.unwrap_or(shop);
    Ok(Json(vec![stored]))
}

/// Query for `GET /api/getCoffeeStoresByLocation`.
#[derive(Debug, Deserialize)]
pub struct ByLocationQuery {
    #[serde(rename = "latLong")]
    pub lat_long: Option<String>,
    pub limit: Option<u32>,
}

/// Location-scoped shop search via the places provider.
#[instrument(skip(state))]
pub async fn get_coffee_stores_by_location(
    State(state): State<SiteState>,
    Query(query): Query<ByLocationQuery>,
) -> Result<Json<Vec<CoffeeShop>>, SiteError> {
    let raw = query
        .lat_long
        .ok_or_else(|| SiteError::BadRequest("latLong is required".to_string()))?;
    let coords = Coordinates::parse_lat_long(&raw)
        .map_err(|e| SiteError::BadRequest(e.to_string()))?;

    let shops = state
        .places()
        .search_coffee_stores(&coords, query.limit.unwrap_or(NEARBY_LIMIT))
        .await?;
    Ok(Json(shops))
}

/// Query for `GET /api/getCoffeeStoreById`.
#[derive(Debug, Deserialize)]
pub struct ByIdQuery {
    pub id: Option<String>,
}

/// Shop lookup by id; responds with a one-element or empty array.
#[instrument(skip(state))]
pub async fn get_coffee_store_by_id(
    State(state): State<SiteState>,
    Query(query): Query<ByIdQuery>,
) -> Result<Json<Vec<CoffeeShop>>, SiteError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SiteError::BadRequest("id is required".to_string()))?;

    let repo = ShopRepository::new(state.pool());
    let shop = repo.get_by_id(&ShopId::new(id)).await?;
    Ok(Json(shop.into_iter().collect()))
}

/// Body for `PUT /api/upVoteCoffeeStorebyId`.
#[derive(Debug, Deserialize)]
pub struct UpVoteRequest {
    #[serde(default)]
    pub id: String,
}

/// Increment a shop's vote count; responds with the updated record.
#[instrument(skip(state))]
pub async fn up_vote_coffee_store_by_id(
    State(state): State<SiteState>,
    Json(body): Json<UpVoteRequest>,
) -> Result<Json<Vec<CoffeeShop>>, SiteError> {
    if body.id.is_empty() {
        return Err(SiteError::BadRequest("id is required".to_string()));
    }

    let id = ShopId::new(body.id);
    let repo = ShopRepository::new(state.pool());
    let updated = repo
        .upvote(&id)
        .await?
        .ok_or_else(|| SiteError::NotFound(format!("coffee shop {id}")))?;
    Ok(Json(vec![updated]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_original_wire_shape() {
        let body: CreateCoffeeStoreRequest = serde_json::from_str(
            r#"{"id":"abc","name":"Better Buzz","voting":0,"imgUrl":"https://img/x.jpg","neighborhood":"","address":""}"#,
        )
        .unwrap();
        assert_eq!(body.id, "abc");
        assert_eq!(body.img_url.as_deref(), Some("https://img/x.jpg"));
    }

    #[test]
    fn test_by_location_query_uses_lat_long_name() {
        let query: ByLocationQuery =
            serde_json::from_str(r#"{"latLong":"32.7,-117.1","limit":30}"#).unwrap();
        assert_eq!(query.lat_long.as_deref(), Some("32.7,-117.1"));
        assert_eq!(query.limit, Some(30));
    }

    #[test]
    fn test_negative_voting_is_clamped() {
        let body: CreateCoffeeStoreRequest =
            serde_json::from_str(r#"{"id":"abc","name":"x","voting":-3}"#).unwrap();
        assert_eq!(body.voting.max(0), 0);
    }
}

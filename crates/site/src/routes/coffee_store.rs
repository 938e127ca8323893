//! Coffee shop detail page and upvote fragment handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use coffee_compass_core::{CoffeeShop, ShopId};

use crate::db::{RepositoryError, ShopRepository};
use crate::error::SiteError;
use crate::filters;
use crate::middleware::load_store;
use crate::state::SiteState;

/// How a detail page resolved its shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedVia {
    /// From the statically seeded set (the build-time analog).
    Static,
    /// From the visitor's session state store.
    Store,
}

/// Resolve a shop by id, preferring the static seed set over the session
/// store. Repository lookup is the caller's fallback when both miss.
#[must_use]
pub fn resolve_shop(
    seed: &[CoffeeShop],
    session_shops: &[CoffeeShop],
    id: &ShopId,
) -> Option<(CoffeeShop, ResolvedVia)> {
    seed.iter()
        .find(|shop| &shop.id == id)
        .map(|shop| (shop.clone(), ResolvedVia::Static))
        .or_else(|| {
            session_shops
                .iter()
                .find(|shop| &shop.id == id)
                .map(|shop| (shop.clone(), ResolvedVia::Store))
        })
}

/// Pick the record to display after a vote-count refresh: the synced record
/// when present, a zero-row or failed refresh keeps the resolved record.
#[must_use]
pub fn sync_votes(
    resolved: CoffeeShop,
    refreshed: Result<Option<CoffeeShop>, RepositoryError>,
) -> CoffeeShop {
    match refreshed {
        Ok(Some(synced)) => synced,
        Ok(None) | Err(_) => resolved,
    }
}

/// Count shown after an upvote attempt: the count the visitor saw plus one
/// on success, unchanged on a miss or failure. The server-side total is
/// never read back here.
#[must_use]
pub fn next_count(displayed: i64, outcome: &Result<Option<CoffeeShop>, RepositoryError>) -> i64 {
    match outcome {
        Ok(Some(_)) => displayed + 1,
        Ok(None) | Err(_) => displayed,
    }
}

/// Shop display data for the detail page.
#[derive(Debug, Clone, Default)]
pub struct ShopDetailView {
    pub name: String,
    pub img_url: String,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
}

impl From<&CoffeeShop> for ShopDetailView {
    fn from(shop: &CoffeeShop) -> Self {
        Self {
            name: shop.name.clone(),
            img_url: shop.img_url_or_placeholder().to_owned(),
            address: shop.address.clone(),
            neighborhood: shop.neighborhood.clone(),
        }
    }
}

/// Detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "coffee_store.html")]
pub struct CoffeeStoreTemplate {
    pub shop: ShopDetailView,
    pub shop_id: String,
    pub count: i64,
}

/// Upvote fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/vote.html")]
pub struct VoteTemplate {
    pub shop_id: String,
    pub count: i64,
}

/// Display the detail page for one shop.
///
/// Resolution order: static seed set, then session store, then a live
/// repository lookup. A shop resolved via the first two paths is persisted
/// with a create-if-absent upsert (failures logged, never surfaced), and its
/// displayed vote count is refreshed from the repository. A zero-row refresh
/// leaves the resolved fields and last-known count unchanged.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<SiteState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<CoffeeStoreTemplate, SiteError> {
    let id = ShopId::new(id);

    // The seed set is the analog of build-time props; a failed fetch here is
    // logged and treated as an empty set, falling through to the other paths.
    let seed = state.places().seed_coffee_stores().await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch seed coffee shops: {e}");
        Vec::new()
    });
    let store = load_store(&session).await?;
    let repo = ShopRepository::new(state.pool());

    let shop = match resolve_shop(&seed, &store.state().shops, &id) {
        Some((resolved, _via)) => {
            // Persist-on-first-view: idempotent, fire-and-forget
            if let Err(e) = repo.upsert(&resolved).await {
                tracing::error!("Error creating coffee shop record: {e}");
            }

            // Vote sync: refresh the displayed count from the backing store
            let refreshed = repo.get_by_id(&id).await;
            if let Err(e) = &refreshed {
                tracing::error!("Error refreshing vote count: {e}");
            }
            Some(sync_votes(resolved, refreshed))
        }
        // Live lookup is the primary resolution here, so its failure
        // surfaces as a page-level error
        None => repo.get_by_id(&id).await?,
    };

    let count = shop.as_ref().map_or(0, |s| s.voting);
    let shop_view = shop
        .as_ref()
        .map_or_else(ShopDetailView::default, ShopDetailView::from);

    Ok(CoffeeStoreTemplate {
        shop: shop_view,
        shop_id: id.to_string(),
        count,
    })
}

/// Upvote form payload: the count currently displayed to the visitor.
#[derive(Debug, Deserialize)]
pub struct VoteForm {
    pub count: i64,
}

/// Handle an upvote and render the refreshed vote fragment.
///
/// On success the displayed count is incremented by exactly one, not read
/// back from the server. Failures are logged and the count re-rendered
/// unchanged; repeated clicks each issue an independent request.
#[instrument(skip(state))]
pub async fn vote(
    State(state): State<SiteState>,
    Path(id): Path<String>,
    Form(form): Form<VoteForm>,
) -> impl IntoResponse {
    let id = ShopId::new(id);
    let repo = ShopRepository::new(state.pool());

    let outcome = repo.upvote(&id).await;
    match &outcome {
        Ok(Some(_)) => {}
        Ok(None) => tracing::error!("Upvote for unknown coffee shop id {id}"),
        Err(e) => tracing::error!("Error upvoting the coffee shop: {e}"),
    }

    VoteTemplate {
        shop_id: id.to_string(),
        count: next_count(form.count, &outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop(id: &str, name: &str) -> CoffeeShop {
        CoffeeShop {
            id: ShopId::new(id),
            name: name.to_string(),
            img_url: None,
            address: None,
            neighborhood: None,
            voting: 0,
        }
    }

    #[test]
    fn test_static_seed_wins_over_session_store() {
        let seed = vec![shop("1", "Alpha")];
        let session = vec![shop("1", "Beta")];
        let (resolved, via) =
            resolve_shop(&seed, &session, &ShopId::new("1")).expect("resolved");
        assert_eq!(resolved.name, "Alpha");
        assert_eq!(via, ResolvedVia::Static);
    }

    #[test]
    fn test_session_store_used_when_seed_misses() {
        let seed = vec![shop("1", "Alpha")];
        let session = vec![shop("2", "Beta")];
        let (resolved, via) =
            resolve_shop(&seed, &session, &ShopId::new("2")).expect("resolved");
        assert_eq!(resolved.name, "Beta");
        assert_eq!(via, ResolvedVia::Store);
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        let seed = vec![shop("1", "Alpha")];
        assert!(resolve_shop(&seed, &[], &ShopId::new("9")).is_none());
    }

    #[test]
    fn test_vote_sync_prefers_synced_record() {
        let resolved = shop("1", "Alpha");
        let mut synced = shop("1", "Alpha");
        synced.voting = 12;

        let merged = sync_votes(resolved, Ok(Some(synced)));
        assert_eq!(merged.voting, 12);
    }

    #[test]
    fn test_vote_sync_zero_rows_keeps_resolved_record() {
        let mut resolved = shop("1", "Alpha");
        resolved.voting = 3;

        let merged = sync_votes(resolved, Ok(None));
        assert_eq!(merged.name, "Alpha");
        assert_eq!(merged.voting, 3);
    }

    #[test]
    fn test_vote_sync_error_keeps_resolved_record() {
        let resolved = shop("1", "Alpha");
        let merged = sync_votes(
            resolved,
            Err(RepositoryError::Database(sqlx::Error::RowNotFound)),
        );
        assert_eq!(merged.name, "Alpha");
        assert_eq!(merged.voting, 0);
    }

    #[test]
    fn test_successful_upvote_increments_displayed_count() {
        // The server total may disagree with what the visitor sees; the
        // fragment still shows displayed + 1.
        let mut updated = shop("1", "Alpha");
        updated.voting = 99;

        assert_eq!(next_count(5, &Ok(Some(updated))), 6);
    }

    #[test]
    fn test_missed_upvote_keeps_displayed_count() {
        assert_eq!(next_count(5, &Ok(None)), 5);
    }

    #[test]
    fn test_failed_upvote_keeps_displayed_count() {
        let outcome = Err(RepositoryError::Database(sqlx::Error::RowNotFound));
        assert_eq!(next_count(5, &outcome), 5);
    }
}

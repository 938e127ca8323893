//! Detail-page resolution order and rendered fragments.

use askama::Template;

use coffee_compass_core::{CoffeeShop, PLACEHOLDER_IMG_URL, ShopId};
use coffee_compass_site::routes::coffee_store::{
    ResolvedVia, VoteTemplate, next_count, resolve_shop, sync_votes,
};
use coffee_compass_site::routes::home::ShopCardView;
use coffee_compass_site::routes::nearby::NearbyTemplate;

fn shop(id: &str, name: &str) -> CoffeeShop {
    CoffeeShop {
        id: ShopId::new(id),
        name: name.to_owned(),
        img_url: None,
        address: None,
        neighborhood: None,
        voting: 0,
    }
}

#[test]
fn test_static_seed_preferred_over_session_store() {
    let seed = vec![shop("1", "Alpha")];
    let session = vec![shop("1", "Beta")];

    let (resolved, via) =
        resolve_shop(&seed, &session, &ShopId::new("1")).expect("resolved");
    assert_eq!(resolved.name, "Alpha");
    assert_eq!(via, ResolvedVia::Static);
}

#[test]
fn test_resolution_falls_back_to_session_then_none() {
    let seed = vec![shop("1", "Alpha")];
    let session = vec![shop("2", "Beta")];

    let (resolved, via) =
        resolve_shop(&seed, &session, &ShopId::new("2")).expect("resolved");
    assert_eq!(resolved.name, "Beta");
    assert_eq!(via, ResolvedVia::Store);

    assert!(resolve_shop(&seed, &session, &ShopId::new("3")).is_none());
}

#[test]
fn test_card_without_image_renders_placeholder_url() {
    let view = ShopCardView::from(&shop("1", "Alpha"));
    let rendered = NearbyTemplate {
        shops: vec![view],
        error: None,
    }
    .render()
    .expect("render");

    assert!(rendered.contains(PLACEHOLDER_IMG_URL));
    assert!(rendered.contains("/coffee-store/1"));
    assert!(!rendered.contains("Something went wrong"));
}

#[test]
fn test_nearby_fragment_renders_error_message() {
    let rendered = NearbyTemplate {
        shops: Vec::new(),
        error: Some("Location permission was denied".to_owned()),
    }
    .render()
    .expect("render");

    assert!(rendered.contains("Something went wrong: Location permission was denied"));
}

#[test]
fn test_upvote_renders_displayed_count_plus_one() {
    // Optimistic increment: the server's own total never reaches the
    // fragment, only what the visitor saw plus one.
    let mut updated = shop("abc", "Alpha");
    updated.voting = 99;

    let count = next_count(5, &Ok(Some(updated)));
    assert_eq!(count, 6);

    let rendered = VoteTemplate {
        shop_id: "abc".to_owned(),
        count,
    }
    .render()
    .expect("render");
    assert!(rendered.contains("&#9733; 6"));
}

#[test]
fn test_zero_row_vote_sync_keeps_resolved_fields() {
    let mut resolved = shop("abc", "Alpha");
    resolved.address = Some("90 N Coast Hwy 101".to_owned());
    resolved.voting = 3;

    let merged = sync_votes(resolved, Ok(None));
    assert_eq!(merged.address.as_deref(), Some("90 N Coast Hwy 101"));
    assert_eq!(merged.voting, 3);
}

#[test]
fn test_vote_fragment_carries_displayed_count() {
    // The fragment embeds the displayed count so the next upvote can apply
    // its optimistic +1 against what the visitor actually sees.
    let rendered = VoteTemplate {
        shop_id: "abc".to_owned(),
        count: 6,
    }
    .render()
    .expect("render");

    assert!(rendered.contains(r#"name="count" value="6""#));
    assert!(rendered.contains("/coffee-store/abc/vote"));
}

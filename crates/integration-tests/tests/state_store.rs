//! State store dispatch semantics across the session boundary.

use coffee_compass_core::{Action, AppState, CoffeeShop, Coordinates, ShopId, Store};

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
fn test_set_coffee_stores_is_wholesale_replacement() {
    let mut store = Store::new();
    store.dispatch(Action::SetCoffeeStores(vec![shop("1", "Alpha")]));
    store.dispatch(Action::SetCoffeeStores(vec![shop("2", "Beta")]));

    let shops = &store.state().shops;
    assert_eq!(shops.len(), 1, "no merge: previous list must be dropped");
    assert_eq!(shops.first().map(|s| s.id.as_str()), Some("2"));
}

#[test]
fn test_dispatches_apply_in_order() {
    let mut store = Store::new();
    store.dispatch(Action::SetLocation(Coordinates::new(1.0, 2.0)));
    store.dispatch(Action::SetCoffeeStores(vec![shop("1", "Alpha")]));
    store.dispatch(Action::SetLocation(Coordinates::new(3.0, 4.0)));

    assert_eq!(store.state().coordinates, Some(Coordinates::new(3.0, 4.0)));
    assert_eq!(store.state().shops.len(), 1);
}

#[test]
fn test_app_state_round_trips_through_session_serialization() {
    // The site persists AppState as a JSON session value; a save/load cycle
    // must not lose or reshape anything.
    let mut store = Store::new();
    store.dispatch(Action::SetLocation(Coordinates::new(32.7157, -117.1611)));
    store.dispatch(Action::SetCoffeeStores(vec![shop("1", "Alpha")]));

    let saved = serde_json::to_string(store.state()).expect("serialize");
    let loaded: AppState = serde_json::from_str(&saved).expect("deserialize");
    let resumed = Store::from_state(loaded);

    assert_eq!(resumed.state(), store.state());
}

#[test]
fn test_empty_shop_list_replaces_populated_one() {
    let mut store = Store::new();
    store.dispatch(Action::SetCoffeeStores(vec![shop("1", "Alpha")]));
    store.dispatch(Action::SetCoffeeStores(Vec::new()));
    assert!(store.state().shops.is_empty());
}

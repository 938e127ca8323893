//! The per-visitor application state store.
//!
//! A single [`Store`] holds the visitor's [`AppState`] (coordinates and the
//! nearby shop list) and is mutated only through [`Store::dispatch`] with a
//! typed [`Action`]. The store is explicitly constructed and threaded through
//! the call graph - handlers load it from the session, dispatch into it, and
//! save it back - rather than living in ambient global state.

use serde::{Deserialize, Serialize};

use crate::types::{CoffeeShop, Coordinates};

/// State shared by the page orchestrators for one visitor session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Browser-reported coordinates, absent until a location report succeeds.
    pub coordinates: Option<Coordinates>,
    /// Nearby shops from the most recent location-scoped search.
    pub shops: Vec<CoffeeShop>,
}

/// Actions recognized by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Replace the stored coordinates.
    SetLocation(Coordinates),
    /// Replace the shop list wholesale. No merge or diff is performed.
    SetCoffeeStores(Vec<CoffeeShop>),
}

/// The state container. Actions apply synchronously in dispatch order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Create a store with empty initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store resuming from previously saved state.
    #[must_use]
    pub const fn from_state(state: AppState) -> Self {
        Self { state }
    }

    /// Apply an action to the state.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetLocation(coordinates) => {
                self.state.coordinates = Some(coordinates);
            }
            Action::SetCoffeeStores(shops) => {
                self.state.shops = shops;
            }
        }
    }

    /// Read the current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Consume the store, yielding the state for serialization.
    #[must_use]
    pub fn into_state(self) -> AppState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShopId;

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
    fn test_initial_state_is_empty() {
        let store = Store::new();
        assert!(store.state().coordinates.is_none());
        assert!(store.state().shops.is_empty());
    }

    #[test]
    fn test_set_location_replaces_coordinates() {
        let mut store = Store::new();
        store.dispatch(Action::SetLocation(Coordinates::new(32.7, -117.1)));
        store.dispatch(Action::SetLocation(Coordinates::new(43.6, -79.3)));
        assert_eq!(
            store.state().coordinates,
            Some(Coordinates::new(43.6, -79.3))
        );
    }

    #[test]
    fn test_set_coffee_stores_replaces_wholesale() {
        let mut store = Store::new();
        store.dispatch(Action::SetCoffeeStores(vec![shop("1", "Alpha")]));
        store.dispatch(Action::SetCoffeeStores(vec![shop("2", "Beta")]));

        let shops = &store.state().shops;
        assert_eq!(shops.len(), 1);
        assert_eq!(shops.first().map(|s| s.id.as_str()), Some("2"));
    }

    #[test]
    fn test_set_coffee_stores_leaves_coordinates_alone() {
        let mut store = Store::new();
        store.dispatch(Action::SetLocation(Coordinates::new(32.7, -117.1)));
        store.dispatch(Action::SetCoffeeStores(vec![shop("1", "Alpha")]));
        assert_eq!(
            store.state().coordinates,
            Some(Coordinates::new(32.7, -117.1))
        );
    }

    #[test]
    fn test_state_round_trips_through_store() {
        let mut store = Store::new();
        store.dispatch(Action::SetCoffeeStores(vec![shop("1", "Alpha")]));
        let resumed = Store::from_state(store.into_state());
        assert_eq!(resumed.state().shops.len(), 1);
    }
}

//! Shared domain types.

mod coords;
mod shop;

pub use coords::{Coordinates, LatLongParseError};
pub use shop::{CoffeeShop, PLACEHOLDER_IMG_URL, ShopId};

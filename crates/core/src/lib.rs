//! Coffee Compass Core - Shared types and state store.
//!
//! This crate provides common types used across all Coffee Compass components:
//! - `site` - Public-facing discovery site
//! - `cli` - Command-line tools for migrations and seed import
//!
//! # Architecture
//!
//! The core crate contains only types, the state store, and the location
//! tracking state machine - no I/O, no database access, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Coffee shop records, shop ids, and coordinates
//! - [`store`] - The per-visitor application state store (typed actions)
//! - [`geo`] - Location tracking over an abstract position source

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod geo;
pub mod store;
pub mod types;

pub use geo::{LocationTracker, PositionError, PositionSource};
pub use store::{Action, AppState, Store};
pub use types::*;

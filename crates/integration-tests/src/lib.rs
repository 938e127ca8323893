//! Integration tests for Coffee Compass.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p coffee-compass-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `state_store` - State store dispatch semantics and session round trips
//! - `location_tracking` - Location tracker and browser-reported positions
//! - `detail_resolution` - Detail-page resolution order and rendered fragments
//!
//! Tests here exercise cross-crate behavior that does not need a live
//! database or places provider; database-backed paths are covered by the
//! repository's own queries running against the migrated schema.

//! Location tracking over an abstract position source.
//!
//! The browser owns the actual geolocation request; the server sees only its
//! outcome. [`PositionSource`] abstracts over "wherever the position came
//! from" so the tracking state machine can be driven by a reported browser
//! result in production and by fakes in tests.

use thiserror::Error;

use crate::store::{Action, Store};
use crate::types::Coordinates;

/// Why a position request failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PositionError {
    /// The visitor declined the permission prompt.
    #[error("Location permission was denied")]
    PermissionDenied,
    /// The platform could not produce a position.
    #[error("{0}")]
    Unavailable(String),
}

/// Something that can produce the current position.
pub trait PositionSource {
    /// Request the current position.
    ///
    /// # Errors
    ///
    /// Returns `PositionError` when no position can be produced.
    fn current_position(&mut self) -> Result<Coordinates, PositionError>;
}

/// Drives the request -> success/error cycle for one location request.
///
/// Each [`track`](Self::track) call runs the full cycle independently;
/// concurrent invocations are not deduplicated and there are no retries.
/// A failed attempt surfaces its message via [`error`](Self::error) and does
/// nothing further until re-invoked.
#[derive(Debug, Clone, Default)]
pub struct LocationTracker {
    finding: bool,
    error: Option<String>,
}

impl LocationTracker {
    /// Create a tracker with no pending request and no error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the current position and apply the outcome to the store.
    ///
    /// On success the coordinates are dispatched via `Action::SetLocation`
    /// and any previous error is cleared. On failure a human-readable error
    /// message is recorded and the store is left untouched.
    pub fn track(&mut self, source: &mut impl PositionSource, store: &mut Store) {
        self.finding = true;

        match source.current_position() {
            Ok(coordinates) => {
                store.dispatch(Action::SetLocation(coordinates));
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }

        self.finding = false;
    }

    /// Whether a position request is currently in flight.
    #[must_use]
    pub const fn is_finding(&self) -> bool {
        self.finding
    }

    /// The error message from the most recent failed request, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

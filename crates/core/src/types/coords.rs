//! Geographic coordinates and the `"lat,long"` wire format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a `"lat,long"` string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LatLongParseError {
    #[error("expected \"lat,long\", got {0:?}")]
    MissingComma(String),
    #[error("invalid latitude: {0}")]
    InvalidLatitude(String),
    #[error("invalid longitude: {0}")]
    InvalidLongitude(String),
}

/// A latitude/longitude pair obtained from the visitor's browser.
///
/// Held only in the session-scoped state store; never persisted to the
/// database. The original endpoints exchange this as a single
/// `latLong=<lat,long>` query parameter, which [`Coordinates::to_lat_long`]
/// and [`Coordinates::parse_lat_long`] round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as the `"lat,long"` wire string.
    #[must_use]
    pub fn to_lat_long(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Parse a `"lat,long"` wire string.
    ///
    /// # Errors
    ///
    /// Returns `LatLongParseError` if the string is not two comma-separated
    /// floats.
    pub fn parse_lat_long(value: &str) -> Result<Self, LatLongParseError> {
        let (lat, long) = value
            .split_once(',')
            .ok_or_else(|| LatLongParseError::MissingComma(value.to_owned()))?;

        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| LatLongParseError::InvalidLatitude(lat.trim().to_owned()))?;
        let longitude = long
            .trim()
            .parse::<f64>()
            .map_err(|_| LatLongParseError::InvalidLongitude(long.trim().to_owned()))?;

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_long_round_trip() {
        let coords = Coordinates::new(32.7157, -117.1611);
        let parsed = Coordinates::parse_lat_long(&coords.to_lat_long()).unwrap();
        assert_eq!(parsed, coords);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let parsed = Coordinates::parse_lat_long(" 43.65 , -79.38 ").unwrap();
        assert_eq!(parsed, Coordinates::new(43.65, -79.38));
    }

    #[test]
    fn test_parse_missing_comma() {
        let err = Coordinates::parse_lat_long("32.7157").unwrap_err();
        assert_eq!(err, LatLongParseError::MissingComma("32.7157".to_owned()));
    }

    #[test]
    fn test_parse_bad_latitude() {
        let err = Coordinates::parse_lat_long("north,-117.1").unwrap_err();
        assert!(matches!(err, LatLongParseError::InvalidLatitude(_)));
    }

    #[test]
    fn test_parse_bad_longitude() {
        let err = Coordinates::parse_lat_long("32.7,west").unwrap_err();
        assert!(matches!(err, LatLongParseError::InvalidLongitude(_)));
    }
}

//! Device location types.

use std::fmt;

use serde::Serialize;

/// Error returned when constructing a point from out-of-range coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A WGS 84 coordinate pair.
///
/// Latitude is bounded to [-90, 90] and longitude to [-180, 180]; any
/// `GeoPoint` value is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Construct a point, validating the coordinate ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                reason: "latitude must be in [-90, 90]",
            });
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinates {
                reason: "longitude must be in [-180, 180]",
            });
        }
        Ok(GeoPoint { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// The device's location, reverse-geocoded to a human-readable address.
///
/// Refreshed when the session language changes; there is no staleness
/// tracking beyond wholesale replacement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub point: GeoPoint,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let p = GeoPoint::new(12.9716, 77.5946).unwrap();
        assert_eq!(p.lat(), 12.9716);
        assert_eq!(p.lng(), 77.5946);
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoPoint::new(90.01, 0.0).is_err());
        assert!(GeoPoint::new(-90.01, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 180.5).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn display_is_lat_comma_lng() {
        let p = GeoPoint::new(12.5, 77.25).unwrap();
        assert_eq!(p.to_string(), "12.5,77.25");
    }
}

//! Core data types and enums for transit data.

use geo::{Coord, Point};

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// Direction of travel for a route pattern, as published by the operator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Unknown,
}

impl Direction {
    /// Parse an operator direction string ("EAST", "Westbound", "n", ...)
    ///
    /// Anything unrecognised maps to `Unknown` rather than failing, since
    /// directions are display-only.
    pub fn parse(value: &str) -> Self {
        match value.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('N') => Self::North,
            Some('S') => Self::South,
            Some('E') => Self::East,
            Some('W') => Self::West,
            _ => Self::Unknown,
        }
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// An immutable geographic point in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    latitude: f64,
    longitude: f64,
}

impl LatLon {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether both components are finite and within the valid degree ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<LatLon> for Coord {
    fn from(p: LatLon) -> Self {
        Coord {
            x: p.longitude,
            y: p.latitude,
        }
    }
}

impl From<LatLon> for Point {
    fn from(p: LatLon) -> Self {
        Point::new(p.longitude, p.latitude)
    }
}

impl From<Point> for LatLon {
    fn from(p: Point) -> Self {
        Self::new(p.y(), p.x())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Stop not found: {0}")]
    StopNotFound(StopIdentifier),

    #[error("Route not found: {0}")]
    RouteNotFound(RouteNumber),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TransitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lon_to_geo() {
        let ubc = LatLon::new(49.2606, -123.2460);

        let coord: Coord = ubc.into();
        assert_eq!(coord.x, -123.2460);
        assert_eq!(coord.y, 49.2606);

        let back: LatLon = Point::from(ubc).into();
        assert_eq!(back, ubc);
    }

    #[test]
    fn test_lat_lon_validity() {
        assert!(LatLon::new(49.0, -123.0).is_valid());
        assert!(LatLon::new(-90.0, 180.0).is_valid());
        assert!(!LatLon::new(91.0, 0.0).is_valid());
        assert!(!LatLon::new(0.0, -180.5).is_valid());
        assert!(!LatLon::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("EAST"), Direction::East);
        assert_eq!(Direction::parse("Westbound"), Direction::West);
        assert_eq!(Direction::parse(" n"), Direction::North);
        assert_eq!(Direction::parse("S"), Direction::South);
        assert_eq!(Direction::parse(""), Direction::Unknown);
        assert_eq!(Direction::parse("CW"), Direction::Unknown);
    }
}

//! Spatial query utilities for distance calculations.
//!
//! Uses Haversine formula for accurate distances on Earth's surface.

use geo::{HaversineDistance, Point};

use crate::models::types::LatLon;

const METERS_PER_DEGREE: f64 = 111_320.0;

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(p1: LatLon, p2: LatLon) -> f64 {
    Point::from(p1).haversine_distance(&Point::from(p2))
}

/// Convert meters to degrees at equator (for bounding box queries)
pub fn meters_to_degrees_approx(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

/// Degree-space radius that covers `radius_m` around `center` in every direction
///
/// Longitude degrees shrink towards the poles, so the radius is widened by
/// `1 / cos(lat)`. Clamped near the poles to keep it finite.
pub fn search_radius_degrees(center: LatLon, radius_m: f64) -> f64 {
    let cos_lat = center.latitude().to_radians().cos().max(0.01);
    meters_to_degrees_approx(radius_m) / cos_lat
}

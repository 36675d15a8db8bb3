//! Core traits for transit entities.
//!
//! These traits are the read-only view the overlay renderer works against.
//! Implementations can be in-memory, database-backed, or generated on the fly.

use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::*;

// ============================================================================
// Core Entity Traits
// ============================================================================

/// One concrete path a route may follow
pub trait RoutePattern: Send + Sync {
    /// Operator name for the pattern (e.g., "EB1")
    fn name(&self) -> &str;

    /// Destination shown on the bus
    fn destination(&self) -> &str;

    fn direction(&self) -> Direction;

    /// Ordered points along the path. May hold fewer than two points.
    fn path(&self) -> &[LatLon];
}

/// A numbered bus line (e.g., "99", "N19")
pub trait Route: Send + Sync {
    /// Display number, used as the legend key
    fn number(&self) -> &RouteNumber;

    /// Long name (e.g., "Commercial-Broadway/UBC")
    fn name(&self) -> &str;

    /// Distinct paths this route follows
    fn patterns(&self) -> &[Arc<dyn RoutePattern>];
}

/// A physical stop served by one or more routes
pub trait Stop: Send + Sync {
    fn id(&self) -> &StopIdentifier;
    fn name(&self) -> &str;
    fn location(&self) -> LatLon;

    /// Routes serving this stop, in the order the data layer lists them
    fn routes(&self) -> &[Arc<dyn Route>];
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Provider of transit data with lookup and query methods
pub trait TransitProvider: Send + Sync {
    // ---- Lookups ----
    fn get_stop(&self, id: &StopIdentifier) -> Option<Arc<dyn Stop>>;
    fn get_route(&self, number: &RouteNumber) -> Option<Arc<dyn Route>>;

    // ---- Collections ----
    fn all_stops(&self) -> Vec<Arc<dyn Stop>>;
    fn all_routes(&self) -> Vec<Arc<dyn Route>>;

    // ---- Spatial queries ----

    /// Find stops within radius (meters)
    fn stops_near(&self, point: LatLon, radius_m: f64) -> Vec<Arc<dyn Stop>>;

    /// Find the N nearest stops to a point
    fn nearest_stops(&self, point: LatLon, n: usize) -> Vec<Arc<dyn Stop>>;
}

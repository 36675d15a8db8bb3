//! In-memory transit provider.
//!
//! Stores stops and routes behind `Arc`s with lookup maps and an R-tree over
//! stop locations, so a host can turn a map tap into a stop selection.

use std::collections::HashMap;
use std::sync::Arc;

use rstar::RTree;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};
use crate::spatial::index::StopNode;

// ============================================================================
// Concrete Implementations of Traits
// ============================================================================

#[derive(Clone, Debug)]
pub struct PatternImpl {
    pub name: Arc<str>,
    pub destination: Arc<str>,
    pub direction: Direction,
    pub path: Vec<LatLon>,
}

impl RoutePattern for PatternImpl {
    fn name(&self) -> &str {
        &self.name
    }

    fn destination(&self) -> &str {
        &self.destination
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn path(&self) -> &[LatLon] {
        &self.path
    }
}

#[derive(Clone)]
pub struct RouteImpl {
    pub number: RouteNumber,
    pub name: Arc<str>,
    pub patterns: Vec<Arc<dyn RoutePattern>>,
}

impl Route for RouteImpl {
    fn number(&self) -> &RouteNumber {
        &self.number
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn patterns(&self) -> &[Arc<dyn RoutePattern>] {
        &self.patterns
    }
}

#[derive(Clone)]
pub struct StopImpl {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    pub location: LatLon,
    pub routes: Vec<Arc<dyn Route>>,
}

impl Stop for StopImpl {
    fn id(&self) -> &StopIdentifier {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> LatLon {
        self.location
    }

    fn routes(&self) -> &[Arc<dyn Route>] {
        &self.routes
    }
}

/// Raw stop data referencing its routes by number, resolved by
/// [`StaticTransitProvider::from_data`]
#[derive(Clone, Debug)]
pub struct StopRecord {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    pub location: LatLon,
    pub route_numbers: Vec<RouteNumber>,
}

// ============================================================================
// Static Provider
// ============================================================================

/// In-memory transit provider with spatial indexing
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone)]
pub struct StaticTransitProvider {
    // Core data
    stops: Vec<Arc<StopImpl>>,
    routes: Vec<Arc<RouteImpl>>,

    // Lookup maps
    stop_map: HashMap<StopIdentifier, Arc<StopImpl>>,
    route_map: HashMap<RouteNumber, Arc<RouteImpl>>,

    // Spatial index
    stop_tree: RTree<StopNode>,
}

impl StaticTransitProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self {
            stops: Vec::new(),
            routes: Vec::new(),
            stop_map: HashMap::new(),
            route_map: HashMap::new(),
            stop_tree: RTree::new(),
        }
    }

    /// Build provider from raw data, resolving each stop's route numbers
    ///
    /// Fails if a stop references a route that isn't in `routes`, or if a
    /// stop location or pattern point is outside valid coordinate ranges.
    pub fn from_data(stops: Vec<StopRecord>, routes: Vec<RouteImpl>) -> Result<Self> {
        for route in &routes {
            for pattern in &route.patterns {
                if let Some(point) = pattern.path().iter().find(|p| !p.is_valid()) {
                    return Err(TransitError::InvalidData(format!(
                        "Route {} pattern {} has invalid point {:?}",
                        route.number,
                        pattern.name(),
                        point
                    )));
                }
            }
        }

        let routes: Vec<Arc<RouteImpl>> = routes.into_iter().map(Arc::new).collect();

        let route_map: HashMap<_, _> = routes
            .iter()
            .map(|r| (r.number.clone(), r.clone()))
            .collect();

        let stops = stops
            .into_iter()
            .map(|record| {
                if !record.location.is_valid() {
                    return Err(TransitError::InvalidData(format!(
                        "Stop {} has invalid location {:?}",
                        record.id, record.location
                    )));
                }

                let routes = record
                    .route_numbers
                    .iter()
                    .map(|number| {
                        route_map
                            .get(number)
                            .map(|r| r.clone() as Arc<dyn Route>)
                            .ok_or_else(|| TransitError::RouteNotFound(number.clone()))
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(Arc::new(StopImpl {
                    id: record.id,
                    name: record.name,
                    location: record.location,
                    routes,
                }))
            })
            .collect::<Result<Vec<_>>>()?;

        let stop_map: HashMap<_, _> = stops
            .iter()
            .map(|s| (s.id.clone(), s.clone()))
            .collect();

        let stop_tree = RTree::bulk_load(
            stops
                .iter()
                .map(|s| StopNode::new(s.location, s.clone()))
                .collect(),
        );

        Ok(Self {
            stops,
            routes,
            stop_map,
            route_map,
            stop_tree,
        })
    }
}

impl Default for StaticTransitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitProvider for StaticTransitProvider {
    fn get_stop(&self, id: &StopIdentifier) -> Option<Arc<dyn Stop>> {
        self.stop_map.get(id).map(|s| s.clone() as Arc<dyn Stop>)
    }

    fn get_route(&self, number: &RouteNumber) -> Option<Arc<dyn Route>> {
        self.route_map.get(number).map(|r| r.clone() as Arc<dyn Route>)
    }

    fn all_stops(&self) -> Vec<Arc<dyn Stop>> {
        self.stops
            .iter()
            .map(|s| s.clone() as Arc<dyn Stop>)
            .collect()
    }

    fn all_routes(&self) -> Vec<Arc<dyn Route>> {
        self.routes
            .iter()
            .map(|r| r.clone() as Arc<dyn Route>)
            .collect()
    }

    fn stops_near(&self, point: LatLon, radius_m: f64) -> Vec<Arc<dyn Stop>> {
        use crate::spatial::queries::{haversine_distance, search_radius_degrees};

        if radius_m <= 0.0 || !radius_m.is_finite() {
            return Vec::new();
        }

        let radius_deg = search_radius_degrees(point, radius_m);

        self.stop_tree
            .locate_within_distance(
                [point.longitude(), point.latitude()],
                radius_deg * radius_deg,
            )
            .filter(|node| haversine_distance(point, node.stop.location) <= radius_m)
            .map(|node| node.stop.clone() as Arc<dyn Stop>)
            .collect()
    }

    fn nearest_stops(&self, point: LatLon, n: usize) -> Vec<Arc<dyn Stop>> {
        self.stop_tree
            .nearest_neighbor_iter(&[point.longitude(), point.latitude()])
            .take(n)
            .map(|node| node.stop.clone() as Arc<dyn Stop>)
            .collect()
    }
}

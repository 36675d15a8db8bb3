//! R-tree nodes for spatial indexing.
//!
//! Stops are indexed in plain degree space (`[lon, lat]`). Queries use the
//! tree as a coarse filter and then apply haversine distance for the final
//! answer, since Euclidean distance in degrees distorts with latitude.

use std::sync::Arc;

use rstar::{PointDistance, RTreeObject, AABB};

use crate::models::types::LatLon;
use crate::provider::static_provider::StopImpl;

#[derive(Clone)]
pub struct StopNode {
    pub stop: Arc<StopImpl>,
    point: [f64; 2],
}

impl StopNode {
    pub fn new(location: LatLon, stop: Arc<StopImpl>) -> Self {
        Self {
            stop,
            point: [location.longitude(), location.latitude()],
        }
    }
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

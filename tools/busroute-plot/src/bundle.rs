//! JSON transit bundle loading.

use anyhow::{Context, Result};
use busroute_transit::prelude::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct Bundle {
    pub stops: Vec<StopEntry>,
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
pub struct StopEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Route numbers serving the stop
    #[serde(default)]
    pub routes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RouteEntry {
    pub number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PatternEntry {
    pub name: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub direction: String,
    /// `[lat, lon]` pairs
    #[serde(default)]
    pub path: Vec<[f64; 2]>,
}

impl Bundle {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bundle: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse bundle: {}", path.display()))
    }

    pub fn into_provider(self) -> busroute_transit::Result<StaticTransitProvider> {
        let routes = self
            .routes
            .into_iter()
            .map(|route| {
                let patterns = route
                    .patterns
                    .into_iter()
                    .map(|pattern| {
                        let path: Vec<LatLon> = pattern
                            .path
                            .iter()
                            .map(|&[lat, lon]| LatLon::new(lat, lon))
                            .collect();

                        Arc::new(PatternImpl {
                            name: pattern.name.into(),
                            destination: pattern.destination.into(),
                            direction: Direction::parse(&pattern.direction),
                            path,
                        }) as Arc<dyn RoutePattern>
                    })
                    .collect();

                RouteImpl {
                    number: RouteNumber::new(&route.number),
                    name: route.name.into(),
                    patterns,
                }
            })
            .collect();

        let stops = self
            .stops
            .into_iter()
            .map(|stop| StopRecord {
                id: StopIdentifier::new(stop.id),
                name: stop.name.into(),
                location: LatLon::new(stop.lat, stop.lon),
                route_numbers: stop.routes.into_iter().map(RouteNumber::from).collect(),
            })
            .collect();

        StaticTransitProvider::from_data(stops, routes)
    }
}

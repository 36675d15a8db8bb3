//! # busroute-transit
//!
//! Read-only transit data for the route overlay: stops, the routes serving
//! them, and the path geometry of each route pattern.
//!
//! ## Features
//!
//! - **Trait-based model**: the overlay only sees `Stop`, `Route` and `RoutePattern`
//! - **In-memory provider**: lookup maps plus an R-tree over stop locations
//! - **Explicit selection**: the selected stop is a value the host passes around
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use busroute_transit::prelude::*;
//!
//! let route = RouteImpl {
//!     number: RouteNumber::new("99"),
//!     name: "UBC/Commercial-Broadway".into(),
//!     patterns: vec![Arc::new(PatternImpl {
//!         name: "EB1".into(),
//!         destination: "Commercial-Broadway Station".into(),
//!         direction: Direction::East,
//!         path: vec![LatLon::new(49.2643, -123.2476), LatLon::new(49.2625, -123.0690)],
//!     })],
//! };
//!
//! let stop = StopRecord {
//!     id: StopIdentifier::new("51479"),
//!     name: "UBC Exchange Bay 7".into(),
//!     location: LatLon::new(49.2674, -123.2473),
//!     route_numbers: vec![RouteNumber::new("99")],
//! };
//!
//! let provider = StaticTransitProvider::from_data(vec![stop], vec![route]).unwrap();
//!
//! let mut selection = StopSelection::new();
//! selection.select_by_id(&provider, &StopIdentifier::new("51479")).unwrap();
//!
//! let selected = selection.selected().unwrap();
//! assert_eq!(selected.routes()[0].number().as_str(), "99");
//! ```

pub mod identifiers;
pub mod models;
pub mod provider;
pub mod selection;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::{
        static_provider::StaticTransitProvider, PatternImpl, RouteImpl, StopImpl, StopRecord,
    };
    pub use crate::selection::StopSelection;
}

pub use prelude::*;

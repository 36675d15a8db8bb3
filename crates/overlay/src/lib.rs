//! # busroute-overlay
//!
//! Turns the routes serving a selected stop into colored line segments for a
//! map view, plus a legend mapping route numbers to colors.
//!
//! Each render pass walks every pattern of every route through the stop,
//! keeps the consecutive point pairs that touch the visible rectangle, and
//! styles them with the route's legend color and a zoom-dependent width.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use busroute_overlay::{OverlayConfig, RouteOverlayRenderer, Viewport};
//! use busroute_transit::prelude::*;
//!
//! let route: Arc<dyn Route> = Arc::new(RouteImpl {
//!     number: RouteNumber::new("99"),
//!     name: "UBC/Commercial-Broadway".into(),
//!     patterns: vec![Arc::new(PatternImpl {
//!         name: "EB1".into(),
//!         destination: "Commercial-Broadway".into(),
//!         direction: Direction::East,
//!         path: vec![
//!             LatLon::new(49.26, -123.25),
//!             LatLon::new(49.26, -123.20),
//!             LatLon::new(49.25, -123.15),
//!         ],
//!     })],
//! });
//!
//! let stop = StopImpl {
//!     id: StopIdentifier::new("51479"),
//!     name: "UBC Exchange Bay 7".into(),
//!     location: LatLon::new(49.2674, -123.2473),
//!     routes: vec![route],
//! };
//!
//! let renderer = RouteOverlayRenderer::new(OverlayConfig::default().with_density(2.0)).unwrap();
//! let viewport = Viewport::new(LatLon::new(49.30, -123.30), LatLon::new(49.20, -123.10));
//!
//! let overlay = renderer.render(Some(&stop), &viewport, 12);
//! assert_eq!(overlay.segments().len(), 2);
//! assert_eq!(overlay.segments()[0].width, 10.0);
//! assert!(overlay.legend().color(&RouteNumber::new("99")).is_some());
//! ```

pub mod config;
pub mod geometry;
pub mod layer;
pub mod legend;
pub mod renderer;
pub mod style;
pub mod viewport;

pub use config::{OverlayConfig, OverlayError};
pub use geometry::{rectangle_intersects_line, NativePoint};
pub use layer::{MapHost, RouteOverlayLayer};
pub use legend::{Legend, LegendEntry, LegendLabel};
pub use renderer::{RouteOverlay, RouteOverlayRenderer, RouteSegment};
pub use style::{LineStyle, LineWidthPolicy};
pub use viewport::Viewport;

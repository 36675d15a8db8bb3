//! Transit data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::{Route, RoutePattern, Stop, TransitProvider};
pub use types::{Direction, LatLon, Result, TransitError};

//! Transit data providers.

pub mod static_provider;

pub use static_provider::{PatternImpl, RouteImpl, StaticTransitProvider, StopImpl, StopRecord};

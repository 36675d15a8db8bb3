//! Geometry helpers shared by the viewport and the renderer.

use busroute_transit::LatLon;
use geo::{Coord, Intersects, Line, Rect};

/// Fixed-point scale of [`NativePoint`] coordinates
pub const COORD_SCALE: i32 = 10_000_000;

/// A point in the map pipeline's native form: degrees scaled by
/// [`COORD_SCALE`] and rounded to `i32`
///
/// Only points passing `LatLon::is_valid` fit; the renderer never converts
/// anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativePoint {
    pub lat: i32,
    pub lon: i32,
}

impl NativePoint {
    pub fn to_lat_lon(self) -> LatLon {
        LatLon::new(
            self.lat as f64 / COORD_SCALE as f64,
            self.lon as f64 / COORD_SCALE as f64,
        )
    }
}

impl From<LatLon> for NativePoint {
    fn from(p: LatLon) -> Self {
        Self {
            lat: (p.latitude() * COORD_SCALE as f64).round() as i32,
            lon: (p.longitude() * COORD_SCALE as f64).round() as i32,
        }
    }
}

/// Whether the closed rectangle spanned by `north_west`/`south_east` shares
/// at least one point with the closed segment `src`-`dst`.
///
/// A rectangle with zero or negative width or height intersects nothing.
pub fn rectangle_intersects_line(
    north_west: LatLon,
    south_east: LatLon,
    src: LatLon,
    dst: LatLon,
) -> bool {
    let width = south_east.longitude() - north_west.longitude();
    let height = north_west.latitude() - south_east.latitude();

    // also rejects NaN spans
    if !(width > 0.0 && height > 0.0) {
        return false;
    }

    let rect = Rect::new(
        Coord {
            x: north_west.longitude(),
            y: south_east.latitude(),
        },
        Coord {
            x: south_east.longitude(),
            y: north_west.latitude(),
        },
    );

    rect.intersects(&Line::new(Coord::from(src), Coord::from(dst)))
}

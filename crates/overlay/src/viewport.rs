//! The visible map rectangle.

use busroute_transit::LatLon;

use crate::geometry::rectangle_intersects_line;

/// Geographic rectangle currently shown by the map, north-west to south-east
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    north_west: LatLon,
    south_east: LatLon,
}

impl Viewport {
    pub fn new(north_west: LatLon, south_east: LatLon) -> Self {
        Self {
            north_west,
            south_east,
        }
    }

    pub fn north_west(&self) -> LatLon {
        self.north_west
    }

    pub fn south_east(&self) -> LatLon {
        self.south_east
    }

    pub fn lat_span(&self) -> f64 {
        self.north_west.latitude() - self.south_east.latitude()
    }

    pub fn lon_span(&self) -> f64 {
        self.south_east.longitude() - self.north_west.longitude()
    }

    /// A viewport with no area shows nothing
    pub fn is_degenerate(&self) -> bool {
        !(self.lat_span() > 0.0 && self.lon_span() > 0.0)
    }

    pub fn intersects_line(&self, src: LatLon, dst: LatLon) -> bool {
        rectangle_intersects_line(self.north_west, self.south_east, src, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ubc() -> Viewport {
        Viewport::new(LatLon::new(49.3, -123.3), LatLon::new(49.2, -123.1))
    }

    #[test]
    fn test_spans() {
        let viewport = ubc();

        assert_relative_eq!(viewport.lat_span(), 0.1, epsilon = 1e-9);
        assert_relative_eq!(viewport.lon_span(), 0.2, epsilon = 1e-9);
        assert!(!viewport.is_degenerate());
    }

    #[test]
    fn test_degenerate() {
        let p = LatLon::new(49.25, -123.2);
        let viewport = Viewport::new(p, p);

        assert!(viewport.is_degenerate());
        assert!(!viewport.intersects_line(p, LatLon::new(49.0, -123.0)));
    }

    #[test]
    fn test_intersects_line() {
        let viewport = ubc();

        assert!(viewport.intersects_line(LatLon::new(49.25, -124.0), LatLon::new(49.25, -122.0)));
        assert!(!viewport.intersects_line(LatLon::new(48.0, -124.0), LatLon::new(48.0, -122.0)));
    }
}

//! Builds route overlays for the selected stop.

use std::sync::Arc;

use busroute_transit::{Route, RouteNumber, Stop};
use palette::Srgb;
use tracing::{debug, trace, warn};

use crate::config::{OverlayConfig, OverlayError};
use crate::geometry::NativePoint;
use crate::legend::Legend;
use crate::style::LineStyle;
use crate::viewport::Viewport;

/// One drawable line between two consecutive points of a route pattern
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSegment {
    pub route: RouteNumber,
    pub start: NativePoint,
    pub end: NativePoint,
    pub color: Srgb<u8>,
    /// Width in device pixels
    pub width: f32,
    pub visible: bool,
}

impl RouteSegment {
    pub fn style(&self) -> LineStyle {
        LineStyle::new(self.color, self.width)
    }
}

/// Everything one render pass produced
#[derive(Clone, Debug, PartialEq)]
pub struct RouteOverlay {
    segments: Vec<RouteSegment>,
    legend: Legend,
}

impl RouteOverlay {
    fn empty(palette: Arc<[Srgb<u8>]>) -> Self {
        Self {
            segments: Vec::new(),
            legend: Legend::new(palette),
        }
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.legend.is_empty()
    }
}

impl Default for RouteOverlay {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            legend: Legend::default(),
        }
    }
}

#[derive(Debug)]
pub struct RouteOverlayRenderer {
    config: OverlayConfig,
    palette: Arc<[Srgb<u8>]>,
}

impl Default for RouteOverlayRenderer {
    fn default() -> Self {
        let config = OverlayConfig::default();
        let palette = Arc::from(config.palette.as_slice());
        Self { config, palette }
    }
}

impl RouteOverlayRenderer {
    pub fn new(config: OverlayConfig) -> Result<Self, OverlayError> {
        config.validate()?;
        let palette = Arc::from(config.palette.as_slice());
        Ok(Self { config, palette })
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Stroke width in device pixels for a zoom level, at the configured density
    pub fn line_width(&self, zoom_level: i32) -> f32 {
        self.config
            .line_widths
            .width_px(zoom_level, self.config.density_factor)
    }

    /// Plot every visible segment of every pattern of every route through
    /// `selected`.
    ///
    /// With no selection the overlay is empty. Each call starts from scratch,
    /// so the result never carries anything over from a previous pass.
    pub fn render(
        &self,
        selected: Option<&dyn Stop>,
        viewport: &Viewport,
        zoom_level: i32,
    ) -> RouteOverlay {
        self.render_at_density(selected, viewport, zoom_level, self.config.density_factor)
    }

    /// [`render`](Self::render) for a display whose density differs from the
    /// configured one. `density_factor` is expected to have passed
    /// [`check_density`](crate::config::check_density).
    pub fn render_at_density(
        &self,
        selected: Option<&dyn Stop>,
        viewport: &Viewport,
        zoom_level: i32,
        density_factor: f32,
    ) -> RouteOverlay {
        let mut overlay = RouteOverlay::empty(self.palette.clone());

        let Some(stop) = selected else {
            debug!("no stop selected, nothing to plot");
            return overlay;
        };

        let width = self
            .config
            .line_widths
            .width_px(zoom_level, density_factor);
        let mut culled = 0usize;

        for route in stop.routes() {
            let color = overlay.legend.add(route.number());
            culled += self.plot_route(&**route, viewport, color, width, &mut overlay.segments);
        }

        debug!(
            stop = %stop.id(),
            routes = overlay.legend.len(),
            segments = overlay.segments.len(),
            culled,
            zoom_level,
            "plotted routes"
        );

        overlay
    }

    /// Returns how many point pairs were culled or skipped
    fn plot_route(
        &self,
        route: &dyn Route,
        viewport: &Viewport,
        color: Srgb<u8>,
        width: f32,
        segments: &mut Vec<RouteSegment>,
    ) -> usize {
        let mut culled = 0;

        for pattern in route.patterns() {
            let before = segments.len();

            for pair in pattern.path().windows(2) {
                let (src, dst) = (pair[0], pair[1]);

                // out-of-range points have no native form
                if !(src.is_valid() && dst.is_valid()) {
                    warn!(
                        route = %route.number(),
                        pattern = pattern.name(),
                        "skipping invalid point pair"
                    );
                    culled += 1;
                    continue;
                }

                if !viewport.intersects_line(src, dst) {
                    culled += 1;
                    continue;
                }

                segments.push(RouteSegment {
                    route: route.number().clone(),
                    start: src.into(),
                    end: dst.into(),
                    color,
                    width,
                    visible: true,
                });
            }

            trace!(
                route = %route.number(),
                pattern = pattern.name(),
                points = pattern.path().len(),
                plotted = segments.len() - before,
                "walked pattern"
            );
        }

        culled
    }
}

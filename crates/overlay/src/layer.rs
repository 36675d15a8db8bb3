//! Host-facing overlay layer.
//!
//! The map view implements [`MapHost`]; the layer asks it for the visible
//! bounds and display density on every redraw and keeps the latest overlay
//! for the host's draw pass to read.

use busroute_transit::StopSelection;
use tracing::{debug, warn};

use crate::config::{OverlayConfig, OverlayError, check_density};
use crate::legend::{Legend, LegendLabel};
use crate::renderer::{RouteOverlay, RouteOverlayRenderer, RouteSegment};
use crate::viewport::Viewport;

/// What the layer needs from the map view
pub trait MapHost {
    /// Geographic rectangle currently on screen
    fn visible_bounds(&self) -> Viewport;

    /// Device pixels per density-independent unit
    fn density_factor(&self) -> f32;
}

#[derive(Debug)]
pub struct RouteOverlayLayer {
    renderer: RouteOverlayRenderer,
    overlay: RouteOverlay,
    viewport: Option<Viewport>,
    density_factor: f32,
}

impl Default for RouteOverlayLayer {
    fn default() -> Self {
        let renderer = RouteOverlayRenderer::default();
        let density_factor = renderer.config().density_factor;
        Self {
            renderer,
            overlay: RouteOverlay::default(),
            viewport: None,
            density_factor,
        }
    }
}

impl RouteOverlayLayer {
    pub fn new(config: OverlayConfig) -> Result<Self, OverlayError> {
        let renderer = RouteOverlayRenderer::new(config)?;
        let density_factor = renderer.config().density_factor;
        Ok(Self {
            renderer,
            overlay: RouteOverlay::default(),
            viewport: None,
            density_factor,
        })
    }

    /// Recompute the overlay for a zoom or selection change.
    ///
    /// The viewport and density are refreshed from the host even when nothing
    /// is selected. An unusable host density falls back to the configured one.
    pub fn redraw(
        &mut self,
        host: &dyn MapHost,
        selection: &StopSelection,
        zoom_level: i32,
    ) -> &RouteOverlay {
        let viewport = host.visible_bounds();
        self.viewport = Some(viewport);

        self.density_factor = check_density(host.density_factor()).unwrap_or_else(|err| {
            warn!("{err}, using configured density");
            self.renderer.config().density_factor
        });

        self.overlay = self.renderer.render_at_density(
            selection.selected().map(|stop| &**stop),
            &viewport,
            zoom_level,
            self.density_factor,
        );

        debug!(zoom_level, segments = self.overlay.segments().len(), "redrew route layer");

        &self.overlay
    }

    pub fn overlay(&self) -> &RouteOverlay {
        &self.overlay
    }

    pub fn segments(&self) -> &[RouteSegment] {
        self.overlay.segments()
    }

    pub fn legend(&self) -> &Legend {
        self.overlay.legend()
    }

    /// Viewport used by the last redraw, if there has been one
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Density used by the last redraw, or the configured one before any redraw
    pub fn density_factor(&self) -> f32 {
        self.density_factor
    }

    pub fn legend_labels(&self) -> Vec<LegendLabel> {
        self.overlay.legend().labels(self.density_factor)
    }
}

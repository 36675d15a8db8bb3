//! Route number to color mapping for one render pass.

use std::sync::Arc;

use busroute_transit::RouteNumber;
use palette::Srgb;

use crate::config::DEFAULT_PALETTE;

const MARGIN_DP: f32 = 10.0;
const TEXT_SIZE_DP: f32 = 14.0;
const LINE_SPACING: f32 = 1.25;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub number: RouteNumber,
    pub color: Srgb<u8>,
}

/// A line of legend text, positioned in screen pixels from the top-left corner
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLabel {
    pub text: String,
    pub color: Srgb<u8>,
    pub x: f32,
    /// Baseline
    pub y: f32,
    pub text_size: f32,
}

/// Colors are handed out from the palette in registration order and wrap
/// around once it is exhausted.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    palette: Arc<[Srgb<u8>]>,
    entries: Vec<LegendEntry>,
}

impl Default for Legend {
    fn default() -> Self {
        Self::new(Arc::from(DEFAULT_PALETTE.as_slice()))
    }
}

impl Legend {
    /// `palette` must not be empty; `OverlayConfig::validate` guarantees this
    /// for legends built by the renderer.
    pub(crate) fn new(palette: Arc<[Srgb<u8>]>) -> Self {
        debug_assert!(!palette.is_empty());
        Self {
            palette,
            entries: Vec::new(),
        }
    }

    /// Register a route, returning its color. Registering the same number
    /// again keeps the color it already has.
    pub fn add(&mut self, number: &RouteNumber) -> Srgb<u8> {
        if let Some(color) = self.color(number) {
            return color;
        }

        let color = self.palette[self.entries.len() % self.palette.len()];
        self.entries.push(LegendEntry {
            number: number.clone(),
            color,
        });
        color
    }

    pub fn color(&self, number: &RouteNumber) -> Option<Srgb<u8>> {
        self.entries
            .iter()
            .find(|entry| &entry.number == number)
            .map(|entry| entry.color)
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lay the legend out as one text line per route, stacked down the left edge
    pub fn labels(&self, density_factor: f32) -> Vec<LegendLabel> {
        let margin = MARGIN_DP * density_factor;
        let text_size = TEXT_SIZE_DP * density_factor;
        let line_height = text_size * LINE_SPACING;

        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| LegendLabel {
                text: entry.number.to_string(),
                color: entry.color,
                x: margin,
                y: margin + text_size + i as f32 * line_height,
                text_size,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn number(s: &str) -> RouteNumber {
        RouteNumber::new(s)
    }

    #[test]
    fn test_assigns_in_order() {
        let mut legend = Legend::default();

        assert_eq!(legend.add(&number("99")), DEFAULT_PALETTE[0]);
        assert_eq!(legend.add(&number("14")), DEFAULT_PALETTE[1]);
        assert_eq!(legend.color(&number("14")), Some(DEFAULT_PALETTE[1]));
        assert_eq!(legend.color(&number("4")), None);
    }

    #[test]
    fn test_reuses_color() {
        let mut legend = Legend::default();
        let first = legend.add(&number("99"));
        legend.add(&number("14"));

        assert_eq!(legend.add(&number("99")), first);
        assert_eq!(legend.len(), 2);
    }

    #[test]
    fn test_wraps_palette() {
        let palette: Arc<[Srgb<u8>]> = Arc::from(vec![Srgb::new(1, 2, 3), Srgb::new(4, 5, 6)]);
        let mut legend = Legend::new(palette);

        legend.add(&number("1"));
        legend.add(&number("2"));
        assert_eq!(legend.add(&number("3")), Srgb::new(1, 2, 3));
    }

    #[test]
    fn test_labels() {
        let mut legend = Legend::default();
        legend.add(&number("99"));
        legend.add(&number("14"));

        let labels = legend.labels(2.0);
        assert_eq!(labels.len(), 2);

        assert_eq!(labels[0].text, "99");
        assert_eq!(labels[0].color, DEFAULT_PALETTE[0]);
        assert_relative_eq!(labels[0].x, 20.0);
        assert_relative_eq!(labels[0].y, 48.0);
        assert_relative_eq!(labels[0].text_size, 28.0);

        assert_eq!(labels[1].text, "14");
        assert_relative_eq!(labels[1].y, 83.0);
    }
}

use palette::Srgb;

/// Zoom-dependent stroke width in density-independent units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineWidthPolicy {
    /// Zoom levels above this use `wide`
    pub wide_above: i32,
    /// Zoom levels above this (and not above `wide_above`) use `medium`
    pub medium_above: i32,
    pub wide: f32,
    pub medium: f32,
    pub narrow: f32,
}

impl Default for LineWidthPolicy {
    fn default() -> Self {
        Self {
            wide_above: 14,
            medium_above: 10,
            wide: 7.0,
            medium: 5.0,
            narrow: 2.0,
        }
    }
}

impl LineWidthPolicy {
    pub fn width_dp(&self, zoom_level: i32) -> f32 {
        if zoom_level > self.wide_above {
            self.wide
        } else if zoom_level > self.medium_above {
            self.medium
        } else {
            self.narrow
        }
    }

    pub fn width_px(&self, zoom_level: i32, density_factor: f32) -> f32 {
        self.width_dp(zoom_level) * density_factor
    }
}

/// Stroke of a single rendered route segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Srgb<u8>,
    /// Width in device pixels
    pub width: f32,
}

impl LineStyle {
    pub fn new(color: Srgb<u8>, width: f32) -> Self {
        Self { color, width }
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        to_hex(self.color)
    }
}

pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_widths() {
        let policy = LineWidthPolicy::default();

        for zoom in [-3, 0, 5, 10] {
            assert_eq!(policy.width_dp(zoom), 2.0, "zoom {zoom}");
        }
        for zoom in 11..=14 {
            assert_eq!(policy.width_dp(zoom), 5.0, "zoom {zoom}");
        }
        for zoom in [15, 16, 21, i32::MAX] {
            assert_eq!(policy.width_dp(zoom), 7.0, "zoom {zoom}");
        }
    }

    #[test]
    fn test_width_scales_with_density() {
        let policy = LineWidthPolicy::default();

        assert_relative_eq!(policy.width_px(12, 2.5), 12.5);
        assert_relative_eq!(policy.width_px(16, 0.75), 5.25);
        assert_relative_eq!(policy.width_px(i32::MIN, 3.0), 6.0);
    }

    #[test]
    fn test_line_style_colors() {
        let style = LineStyle::new(Srgb::new(255, 128, 0), 5.0);

        assert_eq!(style.hex(), "#ff8000");

        assert_eq!(style.width, 5.0);
    }
}

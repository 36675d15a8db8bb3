use palette::Srgb;

use crate::style::LineWidthPolicy;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OverlayError {
    #[error("density factor must be finite and positive, got {0}")]
    InvalidDensity(f32),

    #[error("legend palette has no colors")]
    EmptyPalette,

    #[error("invalid line width policy: {0}")]
    InvalidWidthPolicy(String),
}

/// Colors handed out to routes, in order
pub const DEFAULT_PALETTE: [Srgb<u8>; 10] = [
    Srgb::new(0xe6, 0x19, 0x4b),
    Srgb::new(0x43, 0x63, 0xd8),
    Srgb::new(0x3c, 0xb4, 0x4b),
    Srgb::new(0xf5, 0x82, 0x31),
    Srgb::new(0x91, 0x1e, 0xb4),
    Srgb::new(0x42, 0xd4, 0xf4),
    Srgb::new(0xf0, 0x32, 0xe6),
    Srgb::new(0x80, 0x80, 0x00),
    Srgb::new(0x9a, 0x63, 0x24),
    Srgb::new(0x00, 0x00, 0x75),
];

/// Device density factors must be finite and positive
pub fn check_density(density_factor: f32) -> Result<f32, OverlayError> {
    if density_factor.is_finite() && density_factor > 0.0 {
        Ok(density_factor)
    } else {
        Err(OverlayError::InvalidDensity(density_factor))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    /// Device pixels per density-independent unit
    pub density_factor: f32,
    pub line_widths: LineWidthPolicy,
    pub palette: Vec<Srgb<u8>>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            density_factor: 1.0,
            line_widths: LineWidthPolicy::default(),
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl OverlayConfig {
    pub fn with_density(mut self, density_factor: f32) -> Self {
        self.density_factor = density_factor;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Srgb<u8>>) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> Result<(), OverlayError> {
        check_density(self.density_factor)?;

        if self.palette.is_empty() {
            return Err(OverlayError::EmptyPalette);
        }

        let widths = &self.line_widths;
        for width in [widths.wide, widths.medium, widths.narrow] {
            if !(width.is_finite() && width > 0.0) {
                return Err(OverlayError::InvalidWidthPolicy(format!(
                    "width {width} is not a positive number"
                )));
            }
        }

        if widths.medium_above >= widths.wide_above {
            return Err(OverlayError::InvalidWidthPolicy(format!(
                "medium threshold {} must be below wide threshold {}",
                widths.medium_above, widths.wide_above
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(OverlayConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_density() {
        for density in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = OverlayConfig::default().with_density(density);
            assert!(matches!(config.validate(), Err(OverlayError::InvalidDensity(_))));
        }
    }

    #[test]
    fn test_rejects_empty_palette() {
        let config = OverlayConfig::default().with_palette(vec![]);
        assert_eq!(config.validate(), Err(OverlayError::EmptyPalette));
    }

    #[test]
    fn test_rejects_bad_width_policy() {
        let mut config = OverlayConfig::default();
        config.line_widths.narrow = 0.0;
        assert!(matches!(config.validate(), Err(OverlayError::InvalidWidthPolicy(_))));

        let mut config = OverlayConfig::default();
        config.line_widths.medium_above = 14;
        assert!(matches!(config.validate(), Err(OverlayError::InvalidWidthPolicy(_))));
    }
}

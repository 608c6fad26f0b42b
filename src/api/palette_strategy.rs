use palette::white_point::D65;
use palette::{IntoColor, Lchuv, Srgb};
use serde::{Deserialize, Serialize};

use crate::core::geometry::linspace;
use crate::render::Color;

/// Strategy producing one fill color per variable.
///
/// Any `Fn(usize) -> Vec<Color>` is a palette, so callers can swap palettes
/// without touching chart configuration.
pub trait Palette {
    fn colors(&self, count: usize) -> Vec<Color>;
}

impl<F> Palette for F
where
    F: Fn(usize) -> Vec<Color>,
{
    fn colors(&self, count: usize) -> Vec<Color> {
        self(count)
    }
}

/// Qualitative palette in HCL space (CIE LCh(uv)): constant chroma and
/// luminance, hues spread evenly from `hue_start` to `hue_end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualitativeHcl {
    pub hue_start: f64,
    pub hue_end: f64,
    pub chroma: f64,
    pub luminance: f64,
}

impl QualitativeHcl {
    /// The "Dynamic" preset.
    #[must_use]
    pub const fn dynamic() -> Self {
        Self {
            hue_start: 30.0,
            hue_end: 300.0,
            chroma: 50.0,
            luminance: 70.0,
        }
    }

    /// The "Set 2" preset, hues wrapping round the full circle.
    #[must_use]
    pub const fn set2() -> Self {
        Self {
            hue_start: 0.0,
            hue_end: 360.0,
            chroma: 60.0,
            luminance: 70.0,
        }
    }

    fn color_at(&self, hue: f64) -> Color {
        let hcl = Lchuv::<D65, f64>::new(self.luminance, self.chroma, hue);
        // `into_color` clamps out-of-gamut values into sRGB.
        let rgb: Srgb<f64> = hcl.into_color();
        Color::rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl Default for QualitativeHcl {
    fn default() -> Self {
        Self::dynamic()
    }
}

impl Palette for QualitativeHcl {
    fn colors(&self, count: usize) -> Vec<Color> {
        // A full turn would repeat the first hue as the last one.
        let full_turn = ((self.hue_end - self.hue_start).abs() - 360.0).abs() < 1e-9;
        let hue_end = if full_turn && count > 0 {
            self.hue_start + (self.hue_end - self.hue_start) * (count - 1) as f64 / count as f64
        } else {
            self.hue_end
        };
        linspace(self.hue_start, hue_end, count)
            .into_iter()
            .map(|hue| self.color_at(hue))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Palette, QualitativeHcl};

    #[test]
    fn dynamic_palette_yields_distinct_valid_colors() {
        let colors = QualitativeHcl::dynamic().colors(5);
        assert_eq!(colors.len(), 5);
        for color in &colors {
            color.validate().expect("palette colors stay in gamut");
        }
        assert_ne!(colors[0], colors[4]);
    }

    #[test]
    fn closures_act_as_palettes() {
        let mono = |count: usize| vec![crate::render::Color::GRAY; count];
        assert_eq!(mono.colors(3).len(), 3);
    }
}

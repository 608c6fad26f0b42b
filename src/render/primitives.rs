use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const GRAY: Self = Self::rgb(0.502, 0.502, 0.502);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(ChartError::invalid_value(
                "color",
                format!("`{hex}` is not a #RRGGBB or #RRGGBBAA color"),
            ));
        }

        let channel = |start: usize| -> ChartResult<f64> {
            u8::from_str_radix(&digits[start..start + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| {
                    ChartError::invalid_value("color", format!("`{hex}` has non-hex digits"))
                })
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if self.alpha < 1.0 {
            format!("{rgb}{:02X}", byte(self.alpha))
        } else {
            rgb
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// On/off lengths of a dashed outline, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on: f64,
    pub off: f64,
}

impl DashPattern {
    /// Loosely dashed outline used for reference circles.
    pub const LOOSE: Self = Self { on: 6.0, off: 7.0 };
}

/// Closed outline in grid units, optionally filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub points: Vec<Point>,
    pub fill_color: Option<Color>,
    pub edge_color: Color,
    pub line_width: f64,
    pub dash: Option<DashPattern>,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn filled(
        points: Vec<Point>,
        fill_color: Color,
        edge_color: Color,
        line_width: f64,
    ) -> Self {
        Self {
            points,
            fill_color: Some(fill_color),
            edge_color,
            line_width,
            dash: None,
        }
    }

    #[must_use]
    pub fn outline(points: Vec<Point>, edge_color: Color, line_width: f64) -> Self {
        Self {
            points,
            fill_color: None,
            edge_color,
            line_width,
            dash: None,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon needs at least three points".to_owned(),
            ));
        }
        if !self.points.iter().all(|point| point.is_finite()) {
            return Err(ChartError::InvalidData(
                "polygon coordinates must be finite".to_owned(),
            ));
        }
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(ChartError::InvalidData(
                "polygon line width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(dash) = self.dash {
            if !(dash.on.is_finite() && dash.off.is_finite() && dash.on > 0.0 && dash.off >= 0.0) {
                return Err(ChartError::InvalidData(
                    "dash lengths must be finite, on > 0 and off >= 0".to_owned(),
                ));
            }
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        self.edge_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Center,
    Bottom,
}

/// One label anchored in grid units; the font size is in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub position: Point,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn centered(
        text: impl Into<String>,
        position: Point,
        font_size_px: f64,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            font_size_px,
            color,
            h_align: TextHAlign::Center,
            v_align: TextVAlign::Center,
        }
    }

    #[must_use]
    pub fn with_v_align(mut self, v_align: TextVAlign) -> Self {
        self.v_align = v_align;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

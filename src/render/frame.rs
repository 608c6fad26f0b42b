use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{PolygonPrimitive, TextPrimitive};

/// Pixels reserved above the charts for the title.
pub const TITLE_BAND_PX: f64 = 32.0;
/// Pixels kept free around the charts.
pub const FRAME_MARGIN_PX: f64 = 8.0;
pub const TITLE_FONT_SIZE_PX: f64 = 14.0;

/// Backend-agnostic scene for one draw pass, in grid units.
///
/// Primitives are painted in order, so later polygons cover earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub bounds: Bounds,
    pub title: Option<String>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, bounds: Bounds) -> Self {
        Self {
            viewport,
            bounds,
            title: None,
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.bounds.is_valid() {
            return Err(ChartError::InvalidData(
                "frame bounds must be finite with positive extent".to_owned(),
            ));
        }

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty() && self.texts.is_empty()
    }

    /// Maps grid units onto this frame's viewport.
    #[must_use]
    pub fn canvas_transform(&self) -> CanvasTransform {
        let top_band = if self.title.is_some() { TITLE_BAND_PX } else { 0.0 };
        CanvasTransform::fit(self.bounds, self.viewport, top_band)
    }
}

/// Uniform scale plus offset from grid units to pixels.
///
/// Both axes share one scale so circles stay circles. The vertical axis is
/// not flipped: grid rows grow downwards exactly like pixel rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl CanvasTransform {
    #[must_use]
    pub fn fit(bounds: Bounds, viewport: Viewport, top_band_px: f64) -> Self {
        let available_width = (f64::from(viewport.width) - 2.0 * FRAME_MARGIN_PX).max(1.0);
        let available_height =
            (f64::from(viewport.height) - top_band_px - 2.0 * FRAME_MARGIN_PX).max(1.0);
        let scale = (available_width / bounds.width()).min(available_height / bounds.height());

        let offset_x = FRAME_MARGIN_PX + (available_width - bounds.width() * scale) / 2.0
            - bounds.x_min * scale;
        let offset_y = top_band_px
            + FRAME_MARGIN_PX
            + (available_height - bounds.height() * scale) / 2.0
            - bounds.y_min * scale;

        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    #[must_use]
    pub fn to_pixel(self, point: Point) -> (f64, f64) {
        (
            self.offset_x + point.x * self.scale,
            self.offset_y + point.y * self.scale,
        )
    }
}

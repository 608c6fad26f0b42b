mod frame;
mod null_renderer;
mod primitives;

pub use frame::{
    CanvasTransform, FRAME_MARGIN_PX, RenderFrame, TITLE_BAND_PX, TITLE_FONT_SIZE_PX,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DashPattern, PolygonPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from scaling, geometry and layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};

use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasTransform, Color, PolygonPrimitive, RenderFrame, Renderer, TITLE_BAND_PX,
    TITLE_FONT_SIZE_PX, TextHAlign, TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`, with
///   `write_png` to persist the result
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            ChartError::InvalidData(format!("failed to write `{}`: {err}", path.display()))
        })
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let transform = frame.canvas_transform();
        let mut stats = CairoRenderStats::default();

        for polygon in &frame.polygons {
            draw_polygon(context, transform, polygon)?;
            stats.polygons_drawn += 1;
        }

        for text in &frame.texts {
            let (x, y) = transform.to_pixel(text.position);
            draw_text(context, text, x, y);
            stats.texts_drawn += 1;
        }

        if let Some(title) = &frame.title {
            let x = f64::from(frame.viewport.width) / 2.0;
            let heading = TextPrimitive::centered(
                title.clone(),
                crate::core::Point::new(x, TITLE_BAND_PX / 2.0),
                TITLE_FONT_SIZE_PX,
                Color::BLACK,
            );
            draw_text(context, &heading, x, TITLE_BAND_PX / 2.0);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_polygon(
    context: &Context,
    transform: CanvasTransform,
    polygon: &PolygonPrimitive,
) -> ChartResult<()> {
    let mut points = polygon.points.iter().map(|point| transform.to_pixel(*point));
    let Some((x, y)) = points.next() else {
        return Ok(());
    };

    context.new_path();
    context.move_to(x, y);
    for (x, y) in points {
        context.line_to(x, y);
    }
    context.close_path();

    if let Some(fill) = polygon.fill_color {
        apply_color(context, fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill polygon", err))?;
    }

    if polygon.line_width > 0.0 {
        match polygon.dash {
            Some(dash) => context.set_dash(&[dash.on, dash.off], 0.0),
            None => context.set_dash(&[], 0.0),
        }
        apply_color(context, polygon.edge_color);
        context.set_line_width(polygon.line_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
    } else {
        context.new_path();
    }
    Ok(())
}

fn draw_text(context: &Context, text: &TextPrimitive, x: f64, y: f64) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => x,
        TextHAlign::Center => x - f64::from(text_width) / 2.0,
        TextHAlign::Right => x - f64::from(text_width),
    };
    let y = match text.v_align {
        TextVAlign::Top => y,
        TextVAlign::Center => y - f64::from(text_height) / 2.0,
        TextVAlign::Bottom => y - f64::from(text_height),
    };

    apply_color(context, text.color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}

use serde::Serialize;
use tracing::{debug, trace};

use indexmap::IndexMap;

use crate::core::geometry::{OutlineStyle, RadialPlacement, reference_circles, segments, star};
use crate::core::{
    Bounds, ChartShape, GridSpec, NumericTable, Point, Table, layout, pretty_ticks,
    radius_divisor, scale_table,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextPrimitive, TextVAlign};

use super::RadarChartConfig;
use super::palette_strategy::{Palette, QualitativeHcl};
use super::validation::{resolve_colors, resolve_line_colors, validate_config};

pub const CHART_LABEL_FONT_SIZE_PX: f64 = 10.0;
pub const TICK_LABEL_FONT_SIZE_PX: f64 = 6.0;
pub const LEGEND_LABEL_FONT_SIZE_PX: f64 = 7.0;

/// Offset of a chart's name below its center, in grid units.
const CHART_LABEL_OFFSET: f64 = 0.5;

/// Everything decided before any polygon is computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPlan {
    /// Prepared and, if configured, scaled data.
    pub table: NumericTable,
    pub grid: GridSpec,
    pub bounds: Bounds,
    /// Value that maps onto the full chart radius.
    pub value_divisor: f64,
    /// Reference-circle values; empty when circles are off.
    pub ticks: Vec<f64>,
    /// Per-column fill colors for segments, per-row line colors for stars.
    pub colors: Vec<Color>,
}

/// Lays out one chart per table row and hands the result to a renderer.
pub struct RadarChart<R: Renderer> {
    renderer: R,
    config: RadarChartConfig,
    palette: Box<dyn Palette>,
}

impl<R: Renderer> RadarChart<R> {
    pub fn new(renderer: R, config: RadarChartConfig) -> ChartResult<Self> {
        validate_config(&config)?;
        Ok(Self {
            renderer,
            config,
            palette: Box::new(QualitativeHcl::dynamic()),
        })
    }

    /// Replaces the default qualitative palette. Explicit config colors still win.
    #[must_use]
    pub fn with_palette(mut self, palette: impl Palette + 'static) -> Self {
        self.palette = Box::new(palette);
        self
    }

    #[must_use]
    pub fn config(&self) -> &RadarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Prepares labels, scales, sizes the grid and picks ticks and colors.
    pub fn plan(&self, table: &Table) -> ChartResult<RadarPlan> {
        let config = &self.config;
        let prepared = table.prepare(&config.label_source, config.numeric_only)?;
        let data = if config.scale {
            scale_table(&prepared, config.scale_mode, config.degenerate_range)?
        } else {
            prepared
        };

        let value_divisor = radius_divisor(&data, config.scale);
        let ticks = if config.draw_reference_circles {
            pretty_ticks(data.max_value(), config.tick_target_count)
                .into_iter()
                .filter(|tick| *tick > 0.0)
                .collect()
        } else {
            Vec::new()
        };
        let colors = match config.shape {
            ChartShape::Segments => {
                resolve_colors(config, self.palette.as_ref(), data.column_count())?
            }
            ChartShape::Star => resolve_line_colors(config, self.palette.as_ref(), data.row_count())?,
        };
        let grid = layout(
            data.row_count(),
            config.viewport.aspect_ratio(),
            config.columns,
            config.legend_position,
        )?;

        debug!(
            rows = data.row_count(),
            columns = data.column_count(),
            scaled = config.scale,
            value_divisor,
            tick_count = ticks.len(),
            "planned radar charts"
        );
        Ok(RadarPlan {
            bounds: grid.bounds(),
            table: data,
            grid,
            value_divisor,
            ticks,
            colors,
        })
    }

    /// Builds the complete scene without rendering it.
    pub fn build_frame(&self, table: &Table) -> ChartResult<RenderFrame> {
        let plan = self.plan(table)?;
        self.frame_from_plan(&plan)
    }

    pub fn frame_from_plan(&self, plan: &RadarPlan) -> ChartResult<RenderFrame> {
        let config = &self.config;
        let data = &plan.table;
        let mut frame =
            RenderFrame::new(config.viewport, plan.bounds).with_title(config.title.clone());

        for (index, center) in plan.grid.item_centers(data.row_count()) {
            let placement = RadialPlacement::new(center, config.chart_radius)
                .with_rotation_deg(config.rotation_angle)
                .with_value_divisor(plan.value_divisor);

            match config.shape {
                ChartShape::Segments => {
                    let chart = segments(
                        data.columns(),
                        data.row(index),
                        &plan.colors,
                        placement,
                        OutlineStyle::SEGMENT,
                    )?;
                    frame.polygons.extend(chart.polygons.into_values());
                }
                ChartShape::Star => {
                    let chart = star(
                        data.columns(),
                        data.row(index),
                        line_color(&plan.colors, index)?,
                        placement,
                        config.star_fill_alpha,
                    )?;
                    frame.polygons.push(chart.polygon);
                }
            }

            if let Some(label) = data.label(index) {
                // Alternate anchors so labels of neighbouring rows do not collide.
                let v_align = if index % 2 == 0 {
                    TextVAlign::Bottom
                } else {
                    TextVAlign::Top
                };
                frame.texts.push(
                    TextPrimitive::centered(
                        label,
                        Point::new(center.x, center.y + CHART_LABEL_OFFSET),
                        CHART_LABEL_FONT_SIZE_PX,
                        Color::BLACK,
                    )
                    .with_v_align(v_align),
                );
            }

            if !plan.ticks.is_empty() {
                let circles = reference_circles(placement, &plan.ticks);
                frame.polygons.extend(circles.polygons.into_values());
                frame
                    .texts
                    .extend(circles.labels.into_iter().map(|(tick, anchor)| {
                        TextPrimitive::centered(tick, anchor, TICK_LABEL_FONT_SIZE_PX, Color::GRAY)
                    }));
            }
            trace!(index, x = center.x, y = center.y, "placed chart");
        }

        if let Some(center) = plan.grid.legend_cell {
            let full = vec![1.0; data.column_count()];
            let placement = RadialPlacement::new(center, config.legend_radius)
                .with_rotation_deg(config.rotation_angle);
            let labels: IndexMap<String, Point> = match config.shape {
                ChartShape::Segments => {
                    let legend = segments(
                        data.columns(),
                        &full,
                        &plan.colors,
                        placement,
                        OutlineStyle::SEGMENT,
                    )?;
                    frame.polygons.extend(legend.polygons.into_values());
                    legend.labels
                }
                ChartShape::Star => {
                    let legend = star(data.columns(), &full, Color::GRAY, placement, None)?;
                    frame.polygons.push(legend.polygon);
                    legend.labels
                }
            };
            frame
                .texts
                .extend(labels.into_iter().map(|(column, anchor)| {
                    TextPrimitive::centered(column, anchor, LEGEND_LABEL_FONT_SIZE_PX, Color::BLACK)
                }));
        }

        debug!(
            polygons = frame.polygons.len(),
            texts = frame.texts.len(),
            "built radar frame"
        );
        Ok(frame)
    }

    /// Builds the scene and passes it to the renderer.
    pub fn render(&mut self, table: &Table) -> ChartResult<()> {
        let frame = self.build_frame(table)?;
        self.renderer.render(&frame)
    }
}

/// Row colors repeat when fewer colors than rows are configured.
fn line_color(colors: &[Color], index: usize) -> ChartResult<Color> {
    if colors.is_empty() {
        return Err(ChartError::InvalidData(
            "star charts need at least one line color".to_owned(),
        ));
    }
    Ok(colors[index % colors.len()])
}

use serde::Serialize;

use crate::core::geometry::DEFAULT_STAR_FILL_ALPHA;
use crate::core::{
    ChartShape, DegenerateRangePolicy, LabelSource, LegendPlacement, Point, ScaleMode, Viewport,
};
use crate::render::Color;

use super::json_contract::{serialize_colors, serialize_label_source, serialize_legend};

/// Radius of a full-value segment; neighbouring centers are 1.0 apart, so
/// anything below 0.5 keeps scaled charts from touching.
pub const DEFAULT_CHART_RADIUS: f64 = 0.4;
pub const DEFAULT_LEGEND_RADIUS: f64 = 0.25;
pub const DEFAULT_TICK_TARGET_COUNT: usize = 4;

/// Caller-facing options for a grid of radar (or star) charts.
///
/// Serializes to the loose JSON form accepted by `RadarChartConfig::from_json_compat_str`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChartConfig {
    pub viewport: Viewport,
    pub shape: ChartShape,
    /// Fill opacity of star polygons; `None` draws outlines only.
    pub star_fill_alpha: Option<f64>,
    /// Min-max normalize before drawing.
    pub scale: bool,
    pub scale_mode: ScaleMode,
    pub degenerate_range: DegenerateRangePolicy,
    /// Forced grid width; `None` picks one from the viewport aspect ratio.
    pub columns: Option<usize>,
    pub draw_reference_circles: bool,
    pub tick_target_count: usize,
    #[serde(serialize_with = "serialize_legend")]
    pub legend_position: LegendPlacement,
    /// Explicit colors, per column for segments and per row for stars; the
    /// palette is used when `None`.
    #[serde(serialize_with = "serialize_colors")]
    pub colors: Option<Vec<Color>>,
    /// Rotation of the first segment boundary, in degrees.
    pub rotation_angle: f64,
    pub title: String,
    /// Drop non-numeric columns instead of failing.
    pub numeric_only: bool,
    #[serde(serialize_with = "serialize_label_source")]
    pub label_source: LabelSource,
    pub chart_radius: f64,
    pub legend_radius: f64,
}

impl Default for RadarChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            shape: ChartShape::Segments,
            star_fill_alpha: Some(DEFAULT_STAR_FILL_ALPHA),
            scale: true,
            scale_mode: ScaleMode::ColumnWise,
            degenerate_range: DegenerateRangePolicy::Propagate,
            columns: None,
            draw_reference_circles: true,
            tick_target_count: DEFAULT_TICK_TARGET_COUNT,
            legend_position: LegendPlacement::Auto,
            colors: None,
            rotation_angle: 0.0,
            title: "Radar chart".to_owned(),
            numeric_only: false,
            label_source: LabelSource::Index,
            chart_radius: DEFAULT_CHART_RADIUS,
            legend_radius: DEFAULT_LEGEND_RADIUS,
        }
    }
}

impl RadarChartConfig {
    /// Radar defaults: each variable is scaled across all charts.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Star defaults: each chart is scaled on its own and drawn as one
    /// translucent vertex polygon in its row color.
    #[must_use]
    pub fn star(viewport: Viewport) -> Self {
        Self {
            viewport,
            shape: ChartShape::Star,
            scale_mode: ScaleMode::RowWise,
            title: "Star chart".to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: ChartShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_star_fill_alpha(mut self, alpha: Option<f64>) -> Self {
        self.star_fill_alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: bool) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_scale_mode(mut self, mode: ScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    #[must_use]
    pub fn with_degenerate_range(mut self, policy: DegenerateRangePolicy) -> Self {
        self.degenerate_range = policy;
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: Option<usize>) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_reference_circles(mut self, draw: bool) -> Self {
        self.draw_reference_circles = draw;
        self
    }

    #[must_use]
    pub fn with_tick_target_count(mut self, count: usize) -> Self {
        self.tick_target_count = count;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, placement: LegendPlacement) -> Self {
        self.legend_position = placement;
        self
    }

    /// Places the legend at `(x, y)` grid units, `(0, 0)` being the first chart.
    #[must_use]
    pub fn with_legend_at(self, x: f64, y: f64) -> Self {
        self.with_legend(LegendPlacement::At(Point::new(x, y)))
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_rotation_angle(mut self, degrees: f64) -> Self {
        self.rotation_angle = degrees;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_numeric_only(mut self, numeric_only: bool) -> Self {
        self.numeric_only = numeric_only;
        self
    }

    #[must_use]
    pub fn with_label_source(mut self, source: LabelSource) -> Self {
        self.label_source = source;
        self
    }

    #[must_use]
    pub fn with_radii(mut self, chart_radius: f64, legend_radius: f64) -> Self {
        self.chart_radius = chart_radius;
        self.legend_radius = legend_radius;
        self
    }
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Half of the distance between neighbouring chart centers.
const CELL_HALF_EXTENT: f64 = 0.5;

/// Where the legend goes, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LegendPlacement {
    /// Bottom-right cell of the grid, reserved for the legend.
    #[default]
    Auto,
    /// No legend.
    Disabled,
    /// Caller-chosen center in grid units; no cell is reserved.
    At(Point),
}

impl LegendPlacement {
    #[must_use]
    pub fn reserves_cell(self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// Axis limits of the drawing in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|value| value.is_finite())
            && self.width() > 0.0
            && self.height() > 0.0
    }

    /// Grows the bounds to contain the cell around `center`.
    #[must_use]
    pub fn including_cell(self, center: Point) -> Self {
        Self {
            x_min: self.x_min.min(center.x - CELL_HALF_EXTENT),
            x_max: self.x_max.max(center.x + CELL_HALF_EXTENT),
            y_min: self.y_min.min(center.y - CELL_HALF_EXTENT),
            y_max: self.y_max.max(center.y + CELL_HALF_EXTENT),
        }
    }
}

/// Row/column grid for a set of charts plus the legend position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: usize,
    pub columns: usize,
    /// Center of the legend; `None` when the legend is disabled.
    pub legend_cell: Option<Point>,
}

impl GridSpec {
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Center of the cell at row-major `index`: `(column, row)`.
    #[must_use]
    pub fn cell_center(&self, index: usize) -> Point {
        let row = index / self.columns;
        let column = index % self.columns;
        Point::new(column as f64, row as f64)
    }

    /// Centers of the first `n_items` cells in row-major order.
    pub fn item_centers(&self, n_items: usize) -> impl Iterator<Item = (usize, Point)> + '_ {
        (0..n_items.min(self.cell_count())).map(|index| (index, self.cell_center(index)))
    }

    /// Plain grid limits, extended to include the legend cell.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let plain = Bounds {
            x_min: -CELL_HALF_EXTENT,
            x_max: self.columns as f64 - CELL_HALF_EXTENT,
            y_min: -CELL_HALF_EXTENT,
            y_max: self.rows as f64 - CELL_HALF_EXTENT,
        };
        match self.legend_cell {
            Some(center) => plain.including_cell(center),
            None => plain,
        }
    }
}

/// Sizes the grid for `n_items` charts.
///
/// A forced column count wins; otherwise rows follow the surface aspect
/// (width / height, 1.0 when unknown) so cells stay roughly square. An
/// automatic legend takes one extra cell, the bottom-right one.
pub fn layout(
    n_items: usize,
    aspect_ratio: Option<f64>,
    columns: Option<usize>,
    legend: LegendPlacement,
) -> ChartResult<GridSpec> {
    let needed = (n_items + usize::from(legend.reserves_cell())).max(1);

    let (rows, columns) = match columns {
        Some(0) => {
            return Err(ChartError::invalid_value(
                "columns",
                "must be a positive integer",
            ));
        }
        Some(columns) => (needed.div_ceil(columns), columns),
        None => {
            let aspect = aspect_ratio.unwrap_or(1.0);
            if !(aspect.is_finite() && aspect > 0.0) {
                return Err(ChartError::invalid_value(
                    "aspect_ratio",
                    format!("must be finite and > 0, got {aspect}"),
                ));
            }
            let rows = ((needed as f64 / aspect).sqrt().round_ties_even() as usize).max(1);
            (rows, needed.div_ceil(rows))
        }
    };

    let legend_cell = match legend {
        LegendPlacement::Auto => Some(Point::new(
            columns as f64 - 1.0,
            rows.saturating_sub(1) as f64,
        )),
        LegendPlacement::Disabled => None,
        LegendPlacement::At(center) => Some(center),
    };

    debug!(n_items, rows, columns, ?legend_cell, "computed grid layout");
    Ok(GridSpec {
        rows,
        columns,
        legend_cell,
    })
}

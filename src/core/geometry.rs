//! Polygon geometry for the segments of one chart and its reference circles.
//!
//! All coordinates are grid units. Angles decrease from the rotation angle;
//! with the vertical axis pointing down, that turns counter-clockwise on
//! screen, so at zero rotation segments run upward from the right of the center.

use std::f64::consts::{PI, TAU};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::core::ticks::{format_tick, tick_label_digits};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DashPattern, PolygonPrimitive};

/// Angular spacing of arc points, two degrees.
pub const ARC_RESOLUTION_RAD: f64 = 2.0 * PI / 180.0;
/// Distance of segment labels from the center, relative to the radius.
pub const LABEL_DISTANCE_FACTOR: f64 = 1.4;
/// Points along one reference circle.
pub const CIRCLE_POINT_COUNT: usize = 180;
/// Bearing of reference-circle labels, up and to the right on screen.
pub const CIRCLE_LABEL_BEARING_RAD: f64 = -PI / 4.0;
/// Edge width of a star polygon.
pub const STAR_LINE_WIDTH: f64 = 1.5;
pub const DEFAULT_STAR_FILL_ALPHA: f64 = 0.25;

/// How one row of values is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartShape {
    /// One arc-bounded pie slice per column, filled with the column color.
    #[default]
    Segments,
    /// One straight-edged polygon through the per-axis values, in the row color.
    Star,
}

/// Where and how large one radial chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialPlacement {
    pub center: Point,
    /// Radius reached by a value equal to `value_divisor`.
    pub radius: f64,
    /// Angle of the first segment boundary, in degrees.
    pub rotation_deg: f64,
    pub value_divisor: f64,
}

impl RadialPlacement {
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            rotation_deg: 0.0,
            value_divisor: 1.0,
        }
    }

    #[must_use]
    pub fn with_rotation_deg(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_value_divisor(mut self, value_divisor: f64) -> Self {
        self.value_divisor = value_divisor;
        self
    }

    fn scaled_radius(&self, value: f64) -> f64 {
        value * self.radius / self.value_divisor
    }
}

/// Outline styling shared by every polygon of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlineStyle {
    pub edge_color: Color,
    pub line_width: f64,
}

impl OutlineStyle {
    pub const SEGMENT: Self = Self {
        edge_color: Color::GRAY,
        line_width: 0.5,
    };
    pub const REFERENCE_CIRCLE: Self = Self {
        edge_color: Color::GRAY,
        line_width: 0.5,
    };
}

/// Polygons and label anchors keyed by column name or formatted tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadialGeometry {
    pub polygons: IndexMap<String, PolygonPrimitive>,
    pub labels: IndexMap<String, Point>,
}

impl RadialGeometry {
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// Closed vertex polygon of one star chart plus its axis label anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarGeometry {
    pub polygon: PolygonPrimitive,
    pub labels: IndexMap<String, Point>,
}

/// `count` evenly spaced values from `start` to `end`, both included.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|index| {
                    if index == count - 1 {
                        end
                    } else {
                        start + step * index as f64
                    }
                })
                .collect()
        }
    }
}

/// Segment boundary angles in radians, `len + 1` decreasing entries spanning one turn.
#[must_use]
pub fn segment_angles(len: usize, rotation_deg: f64) -> Vec<f64> {
    let rotation = rotation_deg.to_radians();
    linspace(rotation, rotation - TAU, len + 1)
}

/// Pie-slice polygons, one per column, whose arcs bow out to the row's values.
///
/// Each polygon starts at the center followed by an arc from one boundary
/// angle to the next; neighbouring arcs share their boundary angle. Label
/// anchors sit on each segment's bisector at `1.4 x radius`, independent of
/// the value.
pub fn segments(
    columns: &[String],
    values: &[f64],
    colors: &[Color],
    placement: RadialPlacement,
    style: OutlineStyle,
) -> ChartResult<RadialGeometry> {
    if columns.len() != values.len() {
        return Err(ChartError::InvalidData(format!(
            "{} column names for {} values",
            columns.len(),
            values.len()
        )));
    }
    if colors.len() < values.len() {
        return Err(ChartError::InvalidData(format!(
            "{} colors for {} segments",
            colors.len(),
            values.len()
        )));
    }

    let theta = segment_angles(values.len(), placement.rotation_deg);
    let label_distance = LABEL_DISTANCE_FACTOR * placement.radius;
    let mut geometry = RadialGeometry::default();

    for (index, (name, value)) in columns.iter().zip(values).enumerate() {
        let (start, end) = (theta[index], theta[index + 1]);
        let arc_count = (((end - start).abs() / ARC_RESOLUTION_RAD).floor() as usize).max(2);
        let reach = placement.scaled_radius(*value);

        let mut points = Vec::with_capacity(arc_count + 1);
        points.push(placement.center);
        points.extend(
            linspace(start, end, arc_count)
                .into_iter()
                .map(|angle| placement.center.polar_offset(reach, angle)),
        );

        geometry.polygons.insert(
            name.clone(),
            PolygonPrimitive::filled(points, colors[index], style.edge_color, style.line_width),
        );
        geometry.labels.insert(
            name.clone(),
            placement
                .center
                .polar_offset(label_distance, (start + end) / 2.0),
        );
    }

    Ok(geometry)
}

/// Straight-edged polygon with one vertex per column at the row's value.
///
/// Vertices sit on the segment boundary angles and the first vertex is
/// repeated to close the outline. With `fill_alpha` the polygon is filled in
/// `color` at that opacity; otherwise only the edge is drawn. Axis labels sit
/// at `1.4 x radius` on each vertex angle.
pub fn star(
    columns: &[String],
    values: &[f64],
    color: Color,
    placement: RadialPlacement,
    fill_alpha: Option<f64>,
) -> ChartResult<StarGeometry> {
    if columns.len() != values.len() {
        return Err(ChartError::InvalidData(format!(
            "{} column names for {} values",
            columns.len(),
            values.len()
        )));
    }
    if values.len() < 2 {
        return Err(ChartError::InvalidData(format!(
            "a star needs at least 2 axes, got {}",
            values.len()
        )));
    }

    let theta = segment_angles(values.len(), placement.rotation_deg);
    let label_distance = LABEL_DISTANCE_FACTOR * placement.radius;

    let mut points: Vec<Point> = values
        .iter()
        .zip(&theta)
        .map(|(value, angle)| {
            placement
                .center
                .polar_offset(placement.scaled_radius(*value), *angle)
        })
        .collect();
    points.push(points[0]);

    let labels = columns
        .iter()
        .zip(&theta)
        .map(|(name, angle)| {
            (
                name.clone(),
                placement.center.polar_offset(label_distance, *angle),
            )
        })
        .collect();

    let polygon = match fill_alpha {
        Some(alpha) => {
            PolygonPrimitive::filled(points, color.with_alpha(alpha), color, STAR_LINE_WIDTH)
        }
        None => PolygonPrimitive::outline(points, color, STAR_LINE_WIDTH),
    };
    Ok(StarGeometry { polygon, labels })
}

/// Dashed, unfilled circles at each tick value, keyed by the formatted tick.
///
/// Rotation does not apply; labels line up along one fixed bearing.
#[must_use]
pub fn reference_circles(placement: RadialPlacement, ticks: &[f64]) -> RadialGeometry {
    let digits = tick_label_digits(ticks);
    let theta = linspace(0.0, -TAU, CIRCLE_POINT_COUNT);
    let style = OutlineStyle::REFERENCE_CIRCLE;
    let mut geometry = RadialGeometry::default();

    for tick in ticks {
        let key = format_tick(*tick, digits);
        let reach = placement.scaled_radius(*tick);
        let points = theta
            .iter()
            .map(|angle| placement.center.polar_offset(reach, *angle))
            .collect();

        geometry.polygons.insert(
            key.clone(),
            PolygonPrimitive::outline(points, style.edge_color, style.line_width)
                .with_dash(DashPattern::LOOSE),
        );
        geometry.labels.insert(
            key,
            placement
                .center
                .polar_offset(reach, CIRCLE_LABEL_BEARING_RAD),
        );
    }

    geometry
}

pub mod geometry;
pub mod layout;
pub mod scale;
pub mod table;
pub mod ticks;
pub mod types;

pub use geometry::{
    ChartShape, OutlineStyle, RadialGeometry, RadialPlacement, StarGeometry, reference_circles,
    segment_angles, segments, star,
};
pub use layout::{Bounds, GridSpec, LegendPlacement, layout};
pub use scale::{DegenerateRangePolicy, ScaleMode, radius_divisor, scale_table};
pub use table::{Column, ColumnData, LabelSource, NumericTable, Table};
pub use ticks::{format_tick, pretty_ticks, tick_label_digits};
pub use types::{Point, Viewport};

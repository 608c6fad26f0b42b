//! polar-chart: radar, star and spider chart geometry.
//!
//! Each row of a numeric table becomes one small radial chart, a ring of
//! pie-slice segments (one per column) whose arcs reach out to the row's
//! values. Charts are tiled on a grid with an optional legend cell and
//! dashed reference circles at round values. The crate computes all of that
//! geometry and hands a `RenderFrame` to a pluggable `Renderer`.

pub mod api;
pub mod core;
pub mod demo_data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RadarChart, RadarChartConfig};
pub use error::{ChartError, ChartResult};

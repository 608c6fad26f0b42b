mod config;
mod json_contract;
mod palette_strategy;
mod radar_chart;
mod validation;

pub use config::{
    DEFAULT_CHART_RADIUS, DEFAULT_LEGEND_RADIUS, DEFAULT_TICK_TARGET_COUNT, RadarChartConfig,
};
pub use json_contract::CHART_CONFIG_JSON_SCHEMA_V1;
pub use palette_strategy::{Palette, QualitativeHcl};
pub use radar_chart::{
    CHART_LABEL_FONT_SIZE_PX, LEGEND_LABEL_FONT_SIZE_PX, RadarChart, RadarPlan,
    TICK_LABEL_FONT_SIZE_PX,
};

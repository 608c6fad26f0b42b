use crate::core::{DegenerateRangePolicy, LegendPlacement};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::RadarChartConfig;
use super::palette_strategy::Palette;

pub(super) fn validate_config(config: &RadarChartConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    if config.columns == Some(0) {
        return Err(ChartError::invalid_value(
            "columns",
            "must be a positive integer when set",
        ));
    }

    if config.draw_reference_circles && config.tick_target_count == 0 {
        return Err(ChartError::invalid_value(
            "tick_target_count",
            "must be >= 1 when reference circles are drawn",
        ));
    }

    if let LegendPlacement::At(center) = config.legend_position {
        if !center.is_finite() {
            return Err(ChartError::invalid_value(
                "legend_position",
                "elements must be finite numbers",
            ));
        }
    }

    if !config.rotation_angle.is_finite() {
        return Err(ChartError::invalid_value("rotation_angle", "must be finite"));
    }

    for (name, radius) in [
        ("chart_radius", config.chart_radius),
        ("legend_radius", config.legend_radius),
    ] {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ChartError::invalid_value(name, "must be finite and > 0"));
        }
    }

    if let Some(alpha) = config.star_fill_alpha {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ChartError::invalid_value(
                "star_fill_alpha",
                "must be finite and in [0, 1]",
            ));
        }
    }

    if let DegenerateRangePolicy::Constant(constant) = config.degenerate_range {
        if !constant.is_finite() {
            return Err(ChartError::invalid_value(
                "degenerate_range",
                "constant must be finite",
            ));
        }
    }

    if let Some(colors) = &config.colors {
        if colors.is_empty() {
            return Err(ChartError::invalid_value("colors", "must not be empty when set"));
        }
        for color in colors {
            color
                .validate()
                .map_err(|err| ChartError::invalid_value("colors", err.to_string()))?;
        }
    }

    Ok(())
}

/// Segment fill colors: explicit colors when configured, otherwise `count`
/// colors from `palette`.
pub(super) fn resolve_colors(
    config: &RadarChartConfig,
    palette: &dyn Palette,
    count: usize,
) -> ChartResult<Vec<Color>> {
    let Some(colors) = &config.colors else {
        return palette_colors(palette, count);
    };

    if colors.len() < count {
        return Err(ChartError::invalid_value(
            "colors",
            format!("{} colors given for {count} columns", colors.len()),
        ));
    }
    Ok(colors.clone())
}

/// Star line colors, one per row. Explicit colors repeat when there are fewer
/// than rows.
pub(super) fn resolve_line_colors(
    config: &RadarChartConfig,
    palette: &dyn Palette,
    rows: usize,
) -> ChartResult<Vec<Color>> {
    match &config.colors {
        Some(colors) => Ok(colors.clone()),
        None => palette_colors(palette, rows),
    }
}

fn palette_colors(palette: &dyn Palette, count: usize) -> ChartResult<Vec<Color>> {
    let colors = palette.colors(count);
    if colors.len() < count {
        return Err(ChartError::invalid_value(
            "palette",
            format!("produced {} colors for {count} requested", colors.len()),
        ));
    }
    Ok(colors)
}

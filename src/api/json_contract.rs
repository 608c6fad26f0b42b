use serde::Serializer;
use serde::ser::SerializeSeq;
use serde_json::{Map, Value};

use crate::core::{
    ChartShape, DegenerateRangePolicy, LabelSource, LegendPlacement, Point, ScaleMode, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::RadarChartConfig;
use super::validation::validate_config;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

impl RadarChartConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = serde_json::json!({
            "schema_version": CHART_CONFIG_JSON_SCHEMA_V1,
            "config": self,
        });
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    /// Reads a config from JSON, either bare or wrapped in the v1 contract.
    ///
    /// Missing keys keep their defaults. Values of the wrong kind fail with
    /// `InvalidArgumentType`, out-of-range values with `InvalidArgumentValue`.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::invalid_value("configuration", format!("malformed JSON: {e}"))
        })?;

        let Value::Object(mut object) = value else {
            return Err(ChartError::invalid_type("configuration", "a JSON object"));
        };
        if let Some(version) = object.get("schema_version") {
            if version.as_u64() != Some(u64::from(CHART_CONFIG_JSON_SCHEMA_V1)) {
                return Err(ChartError::invalid_value(
                    "schema_version",
                    format!("unsupported chart config schema version: {version}"),
                ));
            }
            object = match object.remove("config") {
                Some(Value::Object(config)) => config,
                _ => return Err(ChartError::invalid_type("config", "a JSON object")),
            };
        }

        let config = Self::from_json_object(&object)?;
        validate_config(&config)?;
        Ok(config)
    }

    fn from_json_object(object: &Map<String, Value>) -> ChartResult<Self> {
        let mut config = Self::default();
        for (key, value) in object {
            match key.as_str() {
                "viewport" => config.viewport = parse_viewport(value)?,
                "shape" => config.shape = parse_shape(value)?,
                "star_fill_alpha" => {
                    config.star_fill_alpha = match value {
                        Value::Null => None,
                        other => Some(expect_number(key, other)?),
                    }
                }
                "scale" => config.scale = expect_bool(key, value)?,
                "scale_mode" => config.scale_mode = parse_scale_mode(value)?,
                "degenerate_range" => config.degenerate_range = parse_degenerate_range(value)?,
                "columns" => {
                    config.columns = match value {
                        Value::Null => None,
                        other => Some(expect_count(key, other)?),
                    }
                }
                "draw_reference_circles" => {
                    config.draw_reference_circles = expect_bool(key, value)?;
                }
                "tick_target_count" => config.tick_target_count = expect_count(key, value)?,
                "legend_position" => config.legend_position = parse_legend(value)?,
                "colors" => config.colors = parse_colors(value)?,
                "rotation_angle" => config.rotation_angle = expect_number(key, value)?,
                "title" => config.title = expect_str(key, value)?.to_owned(),
                "numeric_only" => config.numeric_only = expect_bool(key, value)?,
                "label_source" => config.label_source = parse_label_source(value)?,
                "chart_radius" => config.chart_radius = expect_number(key, value)?,
                "legend_radius" => config.legend_radius = expect_number(key, value)?,
                unknown => {
                    return Err(ChartError::invalid_value(unknown, "unknown configuration option"));
                }
            }
        }
        Ok(config)
    }
}

fn expect_bool(key: &str, value: &Value) -> ChartResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| ChartError::invalid_type(key, "boolean"))
}

fn expect_number(key: &str, value: &Value) -> ChartResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| ChartError::invalid_type(key, "a number"))
}

fn expect_str<'a>(key: &str, value: &'a Value) -> ChartResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| ChartError::invalid_type(key, "a string"))
}

/// Integer of the right kind; negative integers are a bad value, not a bad type.
fn expect_count(key: &str, value: &Value) -> ChartResult<usize> {
    if let Some(count) = value.as_u64() {
        return usize::try_from(count)
            .map_err(|_| ChartError::invalid_value(key, format!("{count} is too large")));
    }
    if value.is_i64() {
        return Err(ChartError::invalid_value(key, "must be a positive integer"));
    }
    Err(ChartError::invalid_type(key, "an integer"))
}

fn parse_viewport(value: &Value) -> ChartResult<Viewport> {
    let Value::Object(object) = value else {
        return Err(ChartError::invalid_type("viewport", "an object with width and height"));
    };
    let dimension = |name: &str| -> ChartResult<u32> {
        let field = object
            .get(name)
            .ok_or_else(|| ChartError::invalid_value("viewport", format!("missing `{name}`")))?;
        let count = expect_count(name, field)?;
        u32::try_from(count).map_err(|_| ChartError::invalid_value(name, "does not fit in u32"))
    };
    Ok(Viewport::new(dimension("width")?, dimension("height")?))
}

fn parse_shape(value: &Value) -> ChartResult<ChartShape> {
    match expect_str("shape", value)? {
        "segments" => Ok(ChartShape::Segments),
        "star" => Ok(ChartShape::Star),
        other => Err(ChartError::invalid_value(
            "shape",
            format!("`{other}` is not one of segments, star"),
        )),
    }
}

fn parse_scale_mode(value: &Value) -> ChartResult<ScaleMode> {
    match expect_str("scale_mode", value)? {
        "row_wise" => Ok(ScaleMode::RowWise),
        "column_wise" => Ok(ScaleMode::ColumnWise),
        other => Err(ChartError::invalid_value(
            "scale_mode",
            format!("`{other}` is not one of row_wise, column_wise"),
        )),
    }
}

fn parse_degenerate_range(value: &Value) -> ChartResult<DegenerateRangePolicy> {
    match value {
        Value::String(name) if name == "propagate" => Ok(DegenerateRangePolicy::Propagate),
        Value::String(name) if name == "reject" => Ok(DegenerateRangePolicy::Reject),
        Value::String(name) => Err(ChartError::invalid_value(
            "degenerate_range",
            format!("`{name}` is not one of propagate, reject, {{\"constant\": x}}"),
        )),
        Value::Object(object) => match object.get("constant") {
            Some(constant) if object.len() == 1 => Ok(DegenerateRangePolicy::Constant(
                expect_number("degenerate_range.constant", constant)?,
            )),
            _ => Err(ChartError::invalid_value(
                "degenerate_range",
                "object form must be {\"constant\": x}",
            )),
        },
        _ => Err(ChartError::invalid_type(
            "degenerate_range",
            "a string or a {\"constant\": x} object",
        )),
    }
}

/// `null`/`true`: automatic, `false`: disabled, `[x, y]`: explicit center.
fn parse_legend(value: &Value) -> ChartResult<LegendPlacement> {
    match value {
        Value::Null | Value::Bool(true) => Ok(LegendPlacement::Auto),
        Value::Bool(false) => Ok(LegendPlacement::Disabled),
        Value::Array(items) => {
            if items.len() != 2 {
                return Err(ChartError::invalid_value(
                    "legend_position",
                    format!("must have exactly 2 elements, got {}", items.len()),
                ));
            }
            let coordinate = |item: &Value| {
                item.as_f64().ok_or_else(|| {
                    ChartError::invalid_value("legend_position", "elements must be numeric")
                })
            };
            Ok(LegendPlacement::At(Point::new(
                coordinate(&items[0])?,
                coordinate(&items[1])?,
            )))
        }
        _ => Err(ChartError::invalid_type(
            "legend_position",
            "null, a boolean, or an [x, y] pair",
        )),
    }
}

fn parse_colors(value: &Value) -> ChartResult<Option<Vec<Color>>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .iter()
            .map(|item| Color::from_hex(expect_str("colors", item)?))
            .collect::<ChartResult<Vec<_>>>()
            .map(Some),
        _ => Err(ChartError::invalid_type("colors", "null or a list of hex colors")),
    }
}

/// `true`: row index, `false`: no labels, `"name"`: values of that column.
fn parse_label_source(value: &Value) -> ChartResult<LabelSource> {
    match value {
        Value::Bool(true) => Ok(LabelSource::Index),
        Value::Bool(false) => Ok(LabelSource::None),
        Value::String(column) => Ok(LabelSource::Column(column.clone())),
        _ => Err(ChartError::invalid_type("label_source", "a boolean or a column name")),
    }
}

pub(super) fn serialize_legend<S: Serializer>(
    placement: &LegendPlacement,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match placement {
        LegendPlacement::Auto => serializer.serialize_none(),
        LegendPlacement::Disabled => serializer.serialize_bool(false),
        LegendPlacement::At(center) => {
            let mut seq = serializer.serialize_seq(Some(2))?;
            seq.serialize_element(&center.x)?;
            seq.serialize_element(&center.y)?;
            seq.end()
        }
    }
}

pub(super) fn serialize_colors<S: Serializer>(
    colors: &Option<Vec<Color>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match colors {
        None => serializer.serialize_none(),
        Some(colors) => serializer.collect_seq(colors.iter().map(|color| color.to_hex())),
    }
}

pub(super) fn serialize_label_source<S: Serializer>(
    source: &LabelSource,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match source {
        LabelSource::None => serializer.serialize_bool(false),
        LabelSource::Index => serializer.serialize_bool(true),
        LabelSource::Column(column) => serializer.serialize_str(column),
    }
}

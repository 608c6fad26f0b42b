use polar_chart::api::CHART_CONFIG_JSON_SCHEMA_V1;
use polar_chart::core::{
    ChartShape, DegenerateRangePolicy, LabelSource, LegendPlacement, Point, Viewport,
};
use polar_chart::render::Color;
use polar_chart::{ChartError, RadarChartConfig};

fn argument_of(err: &ChartError) -> &str {
    match err {
        ChartError::InvalidArgumentValue { argument, .. }
        | ChartError::InvalidArgumentType { argument, .. } => argument,
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_object_gives_defaults() {
    let config = RadarChartConfig::from_json_compat_str("{}").expect("parse");
    assert_eq!(config, RadarChartConfig::default());
}

#[test]
fn round_trip_preserves_every_option() {
    let config = RadarChartConfig::star(Viewport::new(1024, 512))
        .with_columns(Some(3))
        .with_legend_at(1.5, 2.0)
        .with_colors(vec![
            Color::from_hex("#66C2A5").expect("hex"),
            Color::from_hex("#FC8D6280").expect("hex"),
        ])
        .with_degenerate_range(DegenerateRangePolicy::Constant(0.5))
        .with_label_source(LabelSource::Column("model".to_owned()))
        .with_numeric_only(true)
        .with_rotation_angle(90.0)
        .with_tick_target_count(5);

    let json = config.to_json_pretty().expect("serialize");
    let restored = RadarChartConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn contract_v1_wrapper_is_accepted() {
    let config = RadarChartConfig::default().with_legend(LegendPlacement::Disabled);
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {CHART_CONFIG_JSON_SCHEMA_V1}")));

    let restored = RadarChartConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored.legend_position, LegendPlacement::Disabled);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let err = RadarChartConfig::from_json_compat_str(r#"{"schema_version": 2, "config": {}}"#)
        .expect_err("version 2");
    assert_eq!(argument_of(&err), "schema_version");
}

#[test]
fn zero_columns_is_an_invalid_value() {
    let err = RadarChartConfig::from_json_compat_str(r#"{"columns": 0}"#).expect_err("columns");
    assert!(matches!(err, ChartError::InvalidArgumentValue { .. }));
    assert_eq!(argument_of(&err), "columns");
}

#[test]
fn negative_columns_is_an_invalid_value() {
    let err = RadarChartConfig::from_json_compat_str(r#"{"columns": -2}"#).expect_err("columns");
    assert!(matches!(err, ChartError::InvalidArgumentValue { .. }));
}

#[test]
fn columns_of_the_wrong_kind_is_a_type_error() {
    for input in [r#"{"columns": "3"}"#, r#"{"columns": 2.5}"#] {
        let err = RadarChartConfig::from_json_compat_str(input).expect_err("columns");
        assert!(matches!(err, ChartError::InvalidArgumentType { .. }));
        assert_eq!(argument_of(&err), "columns");
    }
}

#[test]
fn legend_position_forms() {
    let parse = |input: &str| {
        RadarChartConfig::from_json_compat_str(input).map(|config| config.legend_position)
    };
    assert_eq!(parse(r#"{"legend_position": null}"#).expect("null"), LegendPlacement::Auto);
    assert_eq!(parse(r#"{"legend_position": true}"#).expect("true"), LegendPlacement::Auto);
    assert_eq!(
        parse(r#"{"legend_position": false}"#).expect("false"),
        LegendPlacement::Disabled
    );
    assert_eq!(
        parse(r#"{"legend_position": [3, -1.5]}"#).expect("pair"),
        LegendPlacement::At(Point::new(3.0, -1.5))
    );
}

#[test]
fn legend_position_with_three_elements_is_an_invalid_value() {
    let err = RadarChartConfig::from_json_compat_str(r#"{"legend_position": [1, 2, 3]}"#)
        .expect_err("three elements");
    assert!(matches!(err, ChartError::InvalidArgumentValue { .. }));
    assert_eq!(argument_of(&err), "legend_position");
}

#[test]
fn legend_position_with_text_elements_is_an_invalid_value() {
    let err = RadarChartConfig::from_json_compat_str(r#"{"legend_position": ["a", 2]}"#)
        .expect_err("text element");
    assert!(matches!(err, ChartError::InvalidArgumentValue { .. }));
}

#[test]
fn legend_position_of_the_wrong_kind_is_a_type_error() {
    let err = RadarChartConfig::from_json_compat_str(r#"{"legend_position": "top"}"#)
        .expect_err("string legend");
    assert!(matches!(err, ChartError::InvalidArgumentType { .. }));
}

#[test]
fn boolean_options_reject_other_kinds() {
    let err =
        RadarChartConfig::from_json_compat_str(r#"{"scale": 1}"#).expect_err("numeric scale");
    assert!(matches!(err, ChartError::InvalidArgumentType { .. }));
    assert_eq!(argument_of(&err), "scale");
}

#[test]
fn label_source_accepts_booleans_and_names() {
    let parse = |input: &str| {
        RadarChartConfig::from_json_compat_str(input)
            .map(|config| config.label_source)
            .expect("label source")
    };
    assert_eq!(parse(r#"{"label_source": true}"#), LabelSource::Index);
    assert_eq!(parse(r#"{"label_source": false}"#), LabelSource::None);
    assert_eq!(
        parse(r#"{"label_source": "Name"}"#),
        LabelSource::Column("Name".to_owned())
    );
}

#[test]
fn unknown_keys_and_bad_enums_are_invalid_values() {
    for input in [
        r##"{"colour": ["#FF0000"]}"##,
        r#"{"scale_mode": "diagonal"}"#,
        r#"{"degenerate_range": "ignore"}"#,
        r#"{"colors": ["red"]}"#,
        r#"{"colors": []}"#,
        r#"{"chart_radius": -1}"#,
    ] {
        let err = RadarChartConfig::from_json_compat_str(input).expect_err(input);
        assert!(
            matches!(err, ChartError::InvalidArgumentValue { .. }),
            "{input}: {err}"
        );
    }
}

#[test]
fn malformed_or_non_object_input_fails() {
    let err = RadarChartConfig::from_json_compat_str("{").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidArgumentValue { .. }));

    let err = RadarChartConfig::from_json_compat_str("[1, 2]").expect_err("array");
    assert!(matches!(err, ChartError::InvalidArgumentType { .. }));
}

#[test]
fn shape_accepts_only_known_names() {
    let config = RadarChartConfig::from_json_compat_str(r#"{"shape": "star"}"#).expect("star");
    assert_eq!(config.shape, ChartShape::Star);

    let err = RadarChartConfig::from_json_compat_str(r#"{"shape": "triangle"}"#)
        .expect_err("unknown shape");
    assert!(matches!(err, ChartError::InvalidArgumentValue { .. }));
    assert_eq!(argument_of(&err), "shape");
}

#[test]
fn star_fill_alpha_may_be_null_but_not_above_one() {
    let config = RadarChartConfig::from_json_compat_str(r#"{"star_fill_alpha": null}"#)
        .expect("outline only");
    assert_eq!(config.star_fill_alpha, None);

    let err = RadarChartConfig::from_json_compat_str(r#"{"star_fill_alpha": 2.0}"#)
        .expect_err("alpha 2");
    assert_eq!(argument_of(&err), "star_fill_alpha");
}

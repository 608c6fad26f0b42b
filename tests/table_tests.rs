use polar_chart::ChartError;
use polar_chart::core::{Column, ColumnData, LabelSource, Table};

fn widgets() -> Table {
    Table::new(vec![
        Column::text("Name", vec!["Widget A", "Widget B"]),
        Column::numeric("Speed", vec![3.0, 5.0]),
        Column::numeric("Cost", vec![2.0, 1.0]),
    ])
    .expect("valid table")
}

#[test]
fn ragged_columns_are_rejected() {
    let err = Table::new(vec![
        Column::numeric("a", vec![1.0, 2.0]),
        Column::numeric("b", vec![1.0]),
    ])
    .expect_err("ragged table");
    assert!(matches!(err, ChartError::DataShape(_)));
}

#[test]
fn duplicate_column_names_are_rejected() {
    let err = Table::new(vec![
        Column::numeric("a", vec![1.0]),
        Column::numeric("a", vec![2.0]),
    ])
    .expect_err("duplicate names");
    assert!(matches!(err, ChartError::DataShape(_)));
}

#[test]
fn index_labels_default_to_row_numbers() {
    let table = Table::new(vec![Column::numeric("a", vec![1.0, 2.0, 3.0])]).expect("table");
    let prepared = table.prepare(&LabelSource::Index, false).expect("prepare");
    assert_eq!(
        prepared.labels(),
        Some(&["0".to_owned(), "1".to_owned(), "2".to_owned()][..])
    );
}

#[test]
fn label_column_is_removed_from_the_data() {
    let prepared = widgets()
        .prepare(&LabelSource::Column("Name".to_owned()), false)
        .expect("prepare");
    assert_eq!(prepared.columns(), &["Speed".to_owned(), "Cost".to_owned()]);
    assert_eq!(prepared.label(1), Some("Widget B"));
    assert_eq!(prepared.row(0), &[3.0, 2.0]);
}

#[test]
fn text_columns_fail_unless_dropped() {
    let err = widgets()
        .prepare(&LabelSource::Index, false)
        .expect_err("text column left in data");
    match err {
        ChartError::DataShape(message) => {
            assert!(message.contains("Name"));
            assert!(message.contains("numeric_only"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let prepared = widgets()
        .prepare(&LabelSource::None, true)
        .expect("text column dropped");
    assert_eq!(prepared.column_count(), 2);
    assert_eq!(prepared.labels(), None);
}

#[test]
fn missing_label_column_is_a_shape_error() {
    let err = widgets()
        .prepare(&LabelSource::Column("Colour".to_owned()), true)
        .expect_err("unknown label column");
    assert!(matches!(err, ChartError::DataShape(_)));
}

#[test]
fn all_text_table_has_nothing_to_draw() {
    let table = Table::new(vec![Column::text("Name", vec!["x"])]).expect("table");
    let err = table
        .prepare(&LabelSource::Index, true)
        .expect_err("no numeric columns");
    assert!(matches!(err, ChartError::DataShape(_)));
}

#[test]
fn delimited_text_promotes_index_and_infers_types() {
    let text = "\
, a, b, kind
foo, 1, 4.5, x
bar, NA, 2, y
";
    let table = Table::from_delimited(text, ',', Some(0)).expect("parse");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.index(), Some(&["foo".to_owned(), "bar".to_owned()][..]));

    let Some(ColumnData::Numeric(a)) = table.column("a").map(Column::data) else {
        panic!("column `a` should be numeric");
    };
    assert_eq!(a[0], 1.0);
    assert!(a[1].is_nan());
    assert!(!table.column("kind").expect("kind column").is_numeric());
}

#[test]
fn delimited_text_with_uneven_lines_is_rejected() {
    let err = Table::from_delimited("a,b\n1,2\n3\n", ',', None).expect_err("short line");
    assert!(matches!(err, ChartError::DataShape(_)));
}

#[test]
fn quoted_fields_may_contain_the_delimiter() {
    let table = Table::from_delimited("name,value\n\"Smith, J\",3\n", ',', Some(0))
        .expect("quoted field");
    assert_eq!(table.index(), Some(&["Smith, J".to_owned()][..]));
    let Some(ColumnData::Numeric(value)) = table.column("value").map(Column::data) else {
        panic!("column `value` should be numeric");
    };
    assert_eq!(value, &vec![3.0]);
}

#[test]
fn non_ascii_delimiter_is_an_invalid_value() {
    let err = Table::from_delimited("a\u{2016}b\n1\u{2016}2\n", '\u{2016}', None)
        .expect_err("multi-byte delimiter");
    assert!(matches!(err, ChartError::InvalidArgumentValue { .. }));
}

#[test]
fn max_value_skips_missing_cells() {
    let text = "a,b\n1,NA\n3,2\n";
    let prepared = Table::from_delimited(text, ',', None)
        .expect("parse")
        .prepare(&LabelSource::None, false)
        .expect("prepare");
    assert_eq!(prepared.max_value(), 3.0);
}

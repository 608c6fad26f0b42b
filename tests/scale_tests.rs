use polar_chart::ChartError;
use polar_chart::core::{
    DegenerateRangePolicy, LabelSource, NumericTable, ScaleMode, Table, radius_divisor,
    scale_table,
};

fn foo_bar() -> NumericTable {
    Table::from_numeric_rows(
        &["c1", "c2", "c3"],
        vec![("foo", vec![1.0, 2.0, 3.0]), ("bar", vec![4.0, 5.0, 6.0])],
    )
    .expect("valid table")
    .prepare(&LabelSource::Index, false)
    .expect("numeric table")
}

#[test]
fn column_wise_scaling_maps_each_variable_onto_unit_range() {
    let scaled = scale_table(
        &foo_bar(),
        ScaleMode::ColumnWise,
        DegenerateRangePolicy::Propagate,
    )
    .expect("scaling succeeds");

    assert_eq!(scaled.row(0), &[0.0, 0.0, 0.0]);
    assert_eq!(scaled.row(1), &[1.0, 1.0, 1.0]);
    assert_eq!(scaled.labels(), Some(&["foo".to_owned(), "bar".to_owned()][..]));
}

#[test]
fn row_wise_scaling_rescales_each_chart_on_its_own() {
    let scaled = scale_table(&foo_bar(), ScaleMode::RowWise, DegenerateRangePolicy::Propagate)
        .expect("scaling succeeds");

    assert_eq!(scaled.row(0), &[0.0, 0.5, 1.0]);
    assert_eq!(scaled.row(1), &[0.0, 0.5, 1.0]);
}

#[test]
fn scaling_leaves_input_untouched() {
    let table = foo_bar();
    let _ = scale_table(&table, ScaleMode::ColumnWise, DegenerateRangePolicy::Propagate)
        .expect("scaling succeeds");
    assert_eq!(table.row(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn flat_column_propagates_nan_by_default() {
    let table = NumericTable::new(
        vec!["flat".to_owned(), "slope".to_owned()],
        None,
        vec![vec![2.0, 1.0], vec![2.0, 3.0]],
    )
    .expect("valid table");

    let scaled = scale_table(&table, ScaleMode::ColumnWise, DegenerateRangePolicy::Propagate)
        .expect("propagate never fails");
    assert!(scaled.column_values(0).iter().all(|value| value.is_nan()));
    assert_eq!(scaled.column_values(1), vec![0.0, 1.0]);
}

#[test]
fn flat_column_takes_configured_constant() {
    let table = NumericTable::new(
        vec!["flat".to_owned(), "slope".to_owned()],
        None,
        vec![vec![2.0, 1.0], vec![2.0, 3.0]],
    )
    .expect("valid table");

    let scaled = scale_table(
        &table,
        ScaleMode::ColumnWise,
        DegenerateRangePolicy::Constant(0.5),
    )
    .expect("constant policy never fails");
    assert_eq!(scaled.column_values(0), vec![0.5, 0.5]);
}

#[test]
fn flat_row_is_rejected_when_asked() {
    let table = NumericTable::new(
        vec!["a".to_owned(), "b".to_owned()],
        None,
        vec![vec![1.0, 2.0], vec![7.0, 7.0]],
    )
    .expect("valid table");

    let err = scale_table(&table, ScaleMode::RowWise, DegenerateRangePolicy::Reject)
        .expect_err("flat row must be rejected");
    assert!(matches!(
        err,
        ChartError::DegenerateScaling {
            axis: "row",
            index: 1
        }
    ));
}

#[test]
fn radius_divisor_uses_table_maximum_only_for_unscaled_data() {
    let table = foo_bar();
    assert_eq!(radius_divisor(&table, true), 1.0);
    assert_eq!(radius_divisor(&table, false), 6.0);

    let non_positive = NumericTable::new(vec!["a".to_owned()], None, vec![vec![-3.0]])
        .expect("valid table");
    assert_eq!(radius_divisor(&non_positive, false), 1.0);
}
